use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` never needs to know each platform's `Route` enum.
///
/// Each closure receives the label and returns a link that already contains
/// that label as its child, preserving styling. If no builder is registered,
/// `AppNavbar` falls back to any raw `children` passed in.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub pantry: fn(label: &str) -> Element,
    pub plating: fn(label: &str) -> Element,
    pub judging: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Studio");
        let pantry = (builder.pantry)("Pantry");
        let plating = (builder.plating)("Plating");
        let judging = (builder.judging)("Judging");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {pantry}
                {plating}
                {judging}
            }
        }
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "DataChef Studio" }
                    }
                    span { class: "navbar__brand-subtitle", "Cook your data into a story" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
