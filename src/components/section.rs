use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: &'static str,
    #[prop_or_default]
    pub eyebrow: Option<&'static str>,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

/// Centered heading block used at the top of every home-page section.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            if let Some(eyebrow) = props.eyebrow {
                <div class="section-eyebrow">{eyebrow}</div>
            }
            <h2>{props.title}</h2>
            if let Some(subtitle) = props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}
