use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { class: "page-home__title", "Data cook-show studio 🍳" }
            p { class: "page-home__tagline",
                "Prep the finest ingredients (data) and plate a signature dish (analysis) worth subscribing to."
            }

            div { class: "lesson-card",
                div { class: "lesson-card__badge", "📢" }
                h2 { "A message from Detective D" }
                p {
                    "\"Creator detectives! Your survey was a smash hit. Now the viewers' "
                    "reactions (the data) are piling up in the pantry — time to start the "
                    "data cook-show. Every great dish begins with great ingredient prep, "
                    "so grab your aprons.\""
                }
            }

            ul { class: "page-home__lessons",
                li {
                    strong { "Pantry" }
                    " — wash the messy ingredients: spot typos, unify names, and count servings with COUNTIF."
                }
                li {
                    strong { "Plating" }
                    " — turn a list of numbers into your first signature chart and pick the right recipe for the job."
                }
                li {
                    strong { "Judging" }
                    " — critique bad charts, upgrade your own, and plate a three-course menu for the Michelin judge."
                }
            }

            p { class: "page-home__cta",
                "Pick a lesson from the menu above. Everything you type stays in this session until you plate or submit it."
            }
        }
    }
}
