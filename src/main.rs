use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;

mod components {
    pub mod footer;
    pub mod icons;
    pub mod nav;
    pub mod section;
    pub mod video_modal;
}

mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use components::{footer::Footer, nav::Nav};
use i18n::{Lang, DEFAULT_LANG};
use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

/// Recognized paths. `Home` doubles as the catch-all: any path other
/// than `/privacy` and `/terms` renders the home view, with no distinct
/// not-found state.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/")]
    Home,
}

fn switch(routes: Route, lang: Lang) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {lang} /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy {lang} /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService {lang} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let lang = use_state(|| DEFAULT_LANG);

    let on_toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_: MouseEvent| {
            lang.set(lang.toggle());
        })
    };

    let active = *lang;

    html! {
        <BrowserRouter>
            <Nav lang={active} on_toggle_lang={on_toggle_lang} />
            <Switch<Route> render={move |routes| switch(routes, active)} />
            <Footer lang={active} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // The two locale trees must agree before anything renders.
    i18n::validate().expect("locale content out of sync");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn recognized_paths_map_exactly() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/terms"), Some(Route::Terms));
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        for path in [
            "/pricing",
            "/blog",
            "/privacy/archive",
            "/404",
            "/TERMS",
            "/a/b/c",
        ] {
            assert_eq!(Route::recognize(path), Some(Route::Home), "path {path}");
        }
    }
}
