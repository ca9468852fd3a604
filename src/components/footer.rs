use chrono::{Datelike, Local};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::Icon;
use crate::components::nav::{scroll_to_top, section_link};
use crate::config;
use crate::i18n::{Content, Lang};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub lang: Lang,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let t = Content::get(props.lang);
    let navigator = use_navigator().expect("Footer must be rendered inside a router");

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push(&Route::Home);
            scroll_to_top();
        })
    };

    // Footer link order follows the catalog: services, projects, how,
    // pricing, tech, add-ons, faq.
    let targets: [&'static str; 7] = [
        "services", "projects", "how", "pricing", "tech", "add-ons", "faq",
    ];

    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <button class="footer-brand" onclick={go_home}>
                            <span class="nav-logo">{Icon::Bot.svg()}</span>
                            <span class="nav-name">{config::BRAND}</span>
                        </button>
                        <p class="footer-tag">{t.footer_tag}</p>
                        <div class="footer-legal">
                            <Link<Route> to={Route::Privacy}>{t.privacy.title}</Link<Route>>
                            <Link<Route> to={Route::Terms}>{t.terms.title}</Link<Route>>
                        </div>
                    </div>
                    <div class="footer-links">
                        {
                            t.footer_links.iter().zip(targets).map(|(label, id)| {
                                let onclick = section_link(&navigator, id);
                                html! { <button class="footer-link" {onclick}>{*label}</button> }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="footer-copyright">
                    {format!("© {} {}. All rights reserved.", year, config::BRAND)}
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                }

                .footer-grid {
                    display: grid;
                    gap: 2rem;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                }

                .footer-tag {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .footer-legal {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .footer-legal a {
                    font-size: 0.75rem;
                    color: #64748b;
                    text-decoration: none;
                }

                .footer-legal a:hover {
                    color: #4f46e5;
                }

                .footer-links {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                    align-content: start;
                }

                .footer-link {
                    border: none;
                    background: none;
                    font-size: 0.9rem;
                    color: #475569;
                    text-align: left;
                    cursor: pointer;
                }

                .footer-link:hover {
                    color: #0f172a;
                }

                .footer-copyright {
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #e2e8f0;
                    text-align: center;
                    font-size: 0.9rem;
                    color: #64748b;
                }

                @media (min-width: 768px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }

                    .footer-links {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </footer>
    }
}
