use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::{Content, Lang, LegalPage};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub lang: Lang,
}

fn render_legal(page: &'static LegalPage, back_label: &'static str) -> Html {
    html! {
        <div class="legal-page">
            <div class="container">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← "}{back_label}
                </Link<Route>>
                <h1>{page.title}</h1>
                <p class="legal-intro">{page.intro}</p>
                {
                    page.sections.iter().map(|section| html! {
                        <section>
                            <h2>{section.heading}</h2>
                            <p>{section.body}</p>
                        </section>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .legal-page {
                    padding: 5rem 0;
                }

                .legal-page .container {
                    max-width: 48rem;
                }

                .back-link {
                    display: inline-block;
                    margin-bottom: 2rem;
                    color: #4f46e5;
                    text-decoration: none;
                }

                .back-link:hover {
                    text-decoration: underline;
                }

                .legal-page h1 {
                    margin-bottom: 2rem;
                    font-size: 1.9rem;
                    letter-spacing: -0.01em;
                }

                .legal-intro {
                    margin-bottom: 2rem;
                    color: #334155;
                }

                .legal-page section {
                    margin-bottom: 1.5rem;
                }

                .legal-page h2 {
                    margin-bottom: 0.5rem;
                    font-size: 1.1rem;
                }

                .legal-page section p {
                    color: #475569;
                    line-height: 1.7;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &LegalProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let t = Content::get(props.lang);
    render_legal(&t.privacy, t.misc.back_home)
}

#[function_component(TermsOfService)]
pub fn terms_of_service(props: &LegalProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let t = Content::get(props.lang);
    render_legal(&t.terms, t.misc.back_home)
}
