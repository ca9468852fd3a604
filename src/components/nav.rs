use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::Icon;
use crate::config;
use crate::i18n::{Content, Lang};
use crate::Route;

/// Delay between landing on the home route and scrolling to a section,
/// so the section exists in the DOM when we look it up.
const SCROLL_DELAY_MS: u32 = 100;

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_to_section(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Navigates home, then scrolls to the section once the home page is up.
pub fn section_link(navigator: &Navigator, id: &'static str) -> Callback<MouseEvent> {
    let navigator = navigator.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.push(&Route::Home);
        Timeout::new(SCROLL_DELAY_MS, move || scroll_to_section(id)).forget();
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
    pub on_toggle_lang: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let t = Content::get(props.lang);
    let navigator = use_navigator().expect("Nav must be rendered inside a router");
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 10);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push(&Route::Home);
            scroll_to_top();
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let desktop_link = |id: &'static str, label: &'static str| -> Html {
        let onclick = section_link(&navigator, id);
        html! { <button class="nav-link" {onclick}>{label}</button> }
    };

    // Same as desktop_link, but folds the menu away first.
    let mobile_link = |id: &'static str, label: &'static str| -> Html {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigator.push(&Route::Home);
            Timeout::new(SCROLL_DELAY_MS, move || scroll_to_section(id)).forget();
        });
        html! { <button class="mobile-link" {onclick}>{label}</button> }
    };

    let menu_class = if *menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <button class="nav-brand" onclick={go_home}>
                    <span class="nav-logo">{Icon::Bot.svg()}</span>
                    <span class="nav-name">{config::BRAND}</span>
                </button>

                <nav class="nav-links">
                    {desktop_link("services", t.nav.services)}
                    {desktop_link("about", t.nav.about)}
                    {desktop_link("projects", t.nav.projects)}
                    {desktop_link("how", t.nav.how)}
                    {desktop_link("pricing", t.nav.pricing)}
                    {desktop_link("faq", t.nav.faq)}
                </nav>

                <div class="nav-actions">
                    <button class="lang-toggle" onclick={props.on_toggle_lang.clone()}>
                        {props.lang.switch_label()}
                    </button>
                    <a class="btn-primary nav-cta" href={config::TELEGRAM_URL}>
                        {t.cta_primary}
                    </a>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            <div class={menu_class}>
                {mobile_link("services", t.nav.services)}
                {mobile_link("about", t.nav.about)}
                {mobile_link("projects", t.nav.projects)}
                {mobile_link("how", t.nav.how)}
                {mobile_link("pricing", t.nav.pricing)}
                {mobile_link("faq", t.nav.faq)}
                <div class="mobile-menu-actions">
                    <a class="btn-primary" href={config::TELEGRAM_URL}>{t.cta_primary}</a>
                    <a class="btn-ghost" href={config::TELEGRAM_URL}>{t.nav.contact}</a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(226, 232, 240, 0.6);
                }

                .top-nav.scrolled {
                    box-shadow: 0 10px 15px -10px rgba(15, 23, 42, 0.15);
                }

                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #4f46e5, #c026d3);
                    color: #fff;
                }

                .nav-logo .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .nav-name {
                    font-weight: 700;
                    letter-spacing: -0.01em;
                    color: #0f172a;
                }

                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    border: none;
                    background: none;
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #475569;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #4f46e5;
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .lang-toggle {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    background: none;
                    font-size: 0.75rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .lang-toggle:hover {
                    background: #f8fafc;
                }

                .nav-cta {
                    display: none;
                    padding: 0.5rem 1rem;
                    font-size: 0.9rem;
                }

                .burger-menu {
                    display: inline-flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4px;
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 12px;
                    background: #f1f5f9;
                    cursor: pointer;
                    align-items: center;
                }

                .burger-menu span {
                    display: block;
                    width: 1.1rem;
                    height: 2px;
                    background: #475569;
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    background: #fff;
                    transition: max-height 0.3s ease;
                }

                .mobile-menu.open {
                    max-height: 32rem;
                    padding-bottom: 1.5rem;
                    border-top: 1px solid #f1f5f9;
                    box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.1);
                }

                .mobile-link {
                    padding: 0.75rem 0;
                    border: none;
                    border-bottom: 1px solid #f8fafc;
                    background: none;
                    font-size: 1rem;
                    font-weight: 500;
                    color: #334155;
                    text-align: left;
                    cursor: pointer;
                }

                .mobile-link:hover {
                    color: #4f46e5;
                }

                .mobile-menu-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding-top: 1rem;
                }

                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }

                    .burger-menu {
                        display: none;
                    }

                    .mobile-menu {
                        display: none;
                    }
                }

                @media (min-width: 640px) {
                    .nav-cta {
                        display: inline-flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
