use dioxus::prelude::*;

use crate::core::parse;
use crate::core::session::{CleaningRule, MessyExample, PantrySession};

/// Lesson 1 — explore the messy pantry, wash ingredients with find/replace
/// rules, count servings with COUNTIF, and write the team's prep principles.
#[component]
pub fn Pantry() -> Element {
    let mut session = use_signal(PantrySession::default);
    let mut wash_result = use_signal(|| Option::<Result<Vec<String>, String>>::None);
    let mut count_result = use_signal(|| Option::<Result<String, String>>::None);
    let mut certification = use_signal(|| Option::<Result<&'static str, &'static str>>::None);

    let snapshot = session();

    let wash_all = move |_| {
        let applied: Vec<String> = session.with(|s| {
            s.complete_rules()
                .iter()
                .map(|rule| format!("'{}' → '{}'", rule.find, rule.replace))
                .collect()
        });
        if applied.is_empty() {
            wash_result.set(Some(Err(
                "Enter at least one complete washing rule first.".to_string()
            )));
        } else {
            wash_result.set(Some(Ok(applied)));
        }
    };

    let run_count = move |_| {
        let outcome = session.with(|s| match s.counting_ready() {
            Err(warning) => Err(warning.to_string()),
            Ok(()) => {
                let criteria = s.counting_criteria.trim().to_string();
                let stripped = parse::strip_quotes(&criteria).to_string();
                let count = parse::count_matching(&s.counting_source, &criteria);
                Ok(format!(
                    "=COUNTIF(data range, {criteria}) → '{stripped}' appears {count} time(s)."
                ))
            }
        });
        count_result.set(Some(outcome));
    };

    let certify = move |_| {
        let complete = session.with(|s| s.principles_complete());
        certification.set(Some(if complete {
            Ok("Congratulations — those are proper chef's principles! 👨‍🍳👩‍🍳")
        } else {
            Err("All three principles need an answer before you can be certified.")
        }));
    };

    rsx! {
        section { class: "page page-pantry",
            h1 { "Pantry: ingredient prep 🧼" }
            p { "The best dish starts with the best-prepped ingredients. Let's clean the survey data." }

            div { class: "lesson-card",
                h2 { "🧐 Activity 1: explore the ingredient pantry" }
                p {
                    "Open the pantry (the shared sheet) and look for ingredients that still need prep. "
                    "Tap a crate to see what Detective D found."
                }

                div { class: "pantry-examples",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| session.with_mut(|s| s.example = Some(MessyExample::Typo)),
                        "🥔 Muddy potato (typo)"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| session.with_mut(|s| s.example = Some(MessyExample::Variant)),
                        "🥕 Wayward carrot (two names)"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| session.with_mut(|s| s.example = Some(MessyExample::Noise)),
                        "💎 Pebble in the rice (noise)"
                    }
                }

                if let Some(example) = snapshot.example {
                    p { class: "callout callout--info", "{example.caption()}" }
                }

                h3 { "Exploration notes" }
                textarea {
                    class: "field field--area",
                    rows: 5,
                    placeholder: "Write down every ingredient that needs prep…",
                    value: "{snapshot.exploration_notes}",
                    oninput: move |evt| session.with_mut(|s| s.exploration_notes = evt.value()),
                }
            }

            div { class: "lesson-card",
                h2 { "🛠️ Activity 2: wash the ingredients" }
                div { class: "callout callout--note",
                    h3 { "🚨 Chef's rule #1: preserve the original!" }
                    p {
                        "Before any washing, keep the raw ingredients in the fridge — on the real "
                        "sheet, always work on a copy."
                    }
                }

                h3 { "✨ The auto-washer (find & replace)" }
                p { "Unify the stray spellings into one representative name." }

                for (index, rule) in snapshot.rules.iter().cloned().enumerate() {
                    div { class: "rule-row", key: "{index}",
                        input {
                            class: "field rule-row__find",
                            placeholder: "ingredient to wash",
                            value: "{rule.find}",
                            oninput: move |evt| session.with_mut(|s| s.rules[index].find = evt.value()),
                        }
                        span { class: "rule-row__arrow", "→" }
                        input {
                            class: "field rule-row__replace",
                            placeholder: "representative name",
                            value: "{rule.replace}",
                            oninput: move |evt| session.with_mut(|s| s.rules[index].replace = evt.value()),
                        }
                    }
                }

                div { class: "lesson-card__actions",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| session.with_mut(|s| s.rules.push(CleaningRule::default())),
                        "Add a rule +"
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: wash_all,
                        "Wash everything!"
                    }
                }

                match wash_result() {
                    Some(Ok(applied)) => rsx! {
                        p { class: "callout callout--success",
                            "Washed the data with {applied.len()} rule(s)!"
                        }
                        ul { class: "wash-report",
                            for line in applied.iter() {
                                li { "{line}" }
                            }
                        }
                    },
                    Some(Err(warning)) => rsx! {
                        p { class: "callout callout--warning", "{warning}" }
                    },
                    None => rsx! {},
                }
            }

            div { class: "lesson-card",
                h2 { "🔢 Activity 3: count servings with COUNTIF" }
                div { class: "callout callout--note",
                    h3 { "Data range" }
                    p { "Paste the washed ingredient list below, one per line." }
                }
                textarea {
                    class: "field field--area",
                    rows: 7,
                    placeholder: "e.g.\n돈까스\n스파게티\n돈까스",
                    value: "{snapshot.counting_source}",
                    oninput: move |evt| session.with_mut(|s| s.counting_source = evt.value()),
                }

                h3 { "Complete the COUNTIF function ✍️" }
                div { class: "countif-row",
                    code { "=COUNTIF(" }
                    span { class: "countif-row__range", "data range" }
                    code { "," }
                    input {
                        class: "field countif-row__criteria",
                        placeholder: "\"ingredient\"",
                        value: "{snapshot.counting_criteria}",
                        oninput: move |evt| session.with_mut(|s| s.counting_criteria = evt.value()),
                    }
                    code { ")" }
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: run_count,
                    "Check the count!"
                }

                match count_result() {
                    Some(Ok(result)) => rsx! {
                        p { class: "callout callout--info", "{result}" }
                    },
                    Some(Err(warning)) => rsx! {
                        p { class: "callout callout--warning", "{warning}" }
                    },
                    None => rsx! {},
                }
            }

            div { class: "lesson-card",
                h2 { "🎯 Today's challenge: the team's prep principles" }
                p { "Every great chef has prep principles. Agree on three and write them down." }

                {principle_field(session, 0, "Principle 1 (keep it fresh)",
                    "e.g. whatever the task, keep an untouched copy of the original data.")}
                {principle_field(session, 1, "Principle 2 (one name per dish)",
                    "e.g. unify typos and variants into the most standard spelling (돈까쓰 → 돈까스).")}
                {principle_field(session, 2, "Principle 3 (handle the pebbles)",
                    "e.g. delete or flag meaningless answers like 'ㅋㅋㅋ' before analysis.")}

                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: certify,
                    "Submit and get chef-certified!"
                }

                match certification() {
                    Some(Ok(message)) => rsx! {
                        p { class: "callout callout--success", "{message}" }
                    },
                    Some(Err(warning)) => rsx! {
                        p { class: "callout callout--warning", "{warning}" }
                    },
                    None => rsx! {},
                }
            }

            p { class: "page__teaser",
                "Next time: the ingredients are prepped, so we fire up the pans — data visualization!"
            }
        }
    }
}

fn principle_field(
    mut session: Signal<PantrySession>,
    index: usize,
    label: &'static str,
    placeholder: &'static str,
) -> Element {
    let value = session.with(|s| s.principles[index].clone());
    rsx! {
        label { class: "field-label", "{label}" }
        textarea {
            class: "field field--area",
            rows: 3,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| session.with_mut(|s| s.principles[index] = evt.value()),
        }
    }
}
