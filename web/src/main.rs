use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Home, Judging, Pantry, Plating};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/lesson/pantry")]
    Pantry {},
    #[route("/lesson/plating")]
    Plating {},
    #[route("/lesson/judging")]
    Judging {},
}

// Embedded shared theme (ui/assets/theme/main.css); keeps web and desktop
// styling identical without a duplicated stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_pantry(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Pantry {},
        "{label}"
    })
}
fn nav_plating(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Plating {},
        "{label}"
    })
}
fn nav_judging(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Judging {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        pantry: nav_pantry,
        plating: nav_plating,
        judging: nav_judging,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
