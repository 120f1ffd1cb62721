use dioxus::prelude::*;

use crate::core::session::{ChartKind, JudgingSession};

#[derive(Clone, Debug, PartialEq)]
enum MenuStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Lesson 3 — critique the worst restaurant's menu, upgrade the team's own
/// dish, and plate a three-course menu for the Michelin judge.
#[component]
pub fn Judging() -> Element {
    let mut session = use_signal(JudgingSession::default);
    let mut plate_status = use_signal(|| MenuStatus::Idle);
    let mut logbook_status = use_signal(|| MenuStatus::Idle);

    let snapshot = session();

    let plate_menu = move |_| {
        if let Err(warning) = session.with(|s| s.menu_ready()) {
            plate_status.set(MenuStatus::Error(warning.to_string()));
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match native::plate_course_menu(&session()) {
                Ok(message) => plate_status.set(MenuStatus::Done(message)),
                Err(err) => plate_status.set(MenuStatus::Error(err)),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            plate_status.set(MenuStatus::Error(
                "Summary rendering needs the desktop studio build.".to_string(),
            ));
        }
    };

    let submit_logbook = move |_| {
        if let Err(warning) = session.with(|s| s.menu_ready()) {
            logbook_status.set(MenuStatus::Error(warning.to_string()));
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match native::submit_course_menu(&session()) {
                Ok(message) => logbook_status.set(MenuStatus::Done(message)),
                Err(err) => logbook_status.set(MenuStatus::Error(err)),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            logbook_status.set(MenuStatus::Error(
                "Logbook submission needs the desktop studio build.".to_string(),
            ));
        }
    };

    rsx! {
        section { class: "page page-judging",
            h1 { "Judging: earn the Michelin star 🌟" }
            p {
                "Judge D's criteria are simple: honesty (no distortion), kindness (easy to read), "
                "and beauty (a clear message). Prove the kitchen deserves a star."
            }

            div { class: "lesson-card",
                h2 { "🧐 Activity 1: critique the worst restaurant's menu" }
                p { "What is wrong with each dish, and how would you fix it? Write a critique note under each one." }

                div { class: "exhibit-row",
                    {exhibit(session, 0, "Mystery steak", mystery_steak_svg(),
                        "e.g. there's no dish name (title), so nobody knows what these shares mean.")}
                    {exhibit(session, 1, "Rubber ruler", rubber_ruler_svg(),
                        "e.g. the vertical axis doesn't start at zero, so the gap looks exaggerated. Not honest!")}
                    {exhibit(session, 2, "Rainbow bomb", rainbow_bomb_svg(),
                        "e.g. too many colors — nothing stands out, and nothing is emphasized.")}
                }
            }

            div { class: "lesson-card",
                h2 { "🛠️ Activity 2: upgrade the signature dish" }
                p { "Work through the upgrade checklist on the chart you plated last lesson." }

                ul { class: "upgrade-checklist",
                    li {
                        label {
                            input {
                                r#type: "checkbox",
                                checked: snapshot.checklist.title,
                                onchange: move |evt| session.with_mut(|s| s.checklist.title = evt.checked()),
                            }
                            strong { "[Title] " }
                            "Did you rewrite the title so anyone can tell what the chart is about?"
                        }
                    }
                    li {
                        label {
                            input {
                                r#type: "checkbox",
                                checked: snapshot.checklist.axis_labels,
                                onchange: move |evt| session.with_mut(|s| s.checklist.axis_labels = evt.checked()),
                            }
                            strong { "[Axis labels] " }
                            "Did you label the vertical axis with its unit, like 'students'?"
                        }
                    }
                    li {
                        label {
                            input {
                                r#type: "checkbox",
                                checked: snapshot.checklist.color_emphasis,
                                onchange: move |evt| session.with_mut(|s| s.checklist.color_emphasis = evt.checked()),
                            }
                            strong { "[Color emphasis] " }
                            "Did you recolor only the one bar that carries the message?"
                        }
                    }
                    li {
                        label {
                            input {
                                r#type: "checkbox",
                                checked: snapshot.checklist.data_labels,
                                onchange: move |evt| session.with_mut(|s| s.checklist.data_labels = evt.checked()),
                            }
                            strong { "[Data labels] " }
                            "Did you print the actual values on the bars or slices?"
                        }
                    }
                }
                p { class: "callout callout--note", "{snapshot.checklist.digest()}" }
            }

            div { class: "lesson-card",
                h2 { "🎯 Today's challenge: the three-course menu" }
                p {
                    "A Michelin kitchen is judged on the whole course. Define the three charts that tell "
                    "your story — appetizer, main dish, dessert — then plate the menu."
                }

                div { class: "course-row",
                    for (index, course) in snapshot.courses.iter().cloned().enumerate() {
                        div { class: "course-card", key: "{index}",
                            h3 { "{course.role}" }
                            input {
                                class: "field",
                                placeholder: "course (chart) title",
                                value: "{course.title}",
                                oninput: move |evt| session.with_mut(|s| s.courses[index].title = evt.value()),
                            }
                            div { class: "chart-kind-picker",
                                for kind in ChartKind::all() {
                                    label { class: "chart-kind-picker__option",
                                        input {
                                            r#type: "radio",
                                            name: "course-kind-{index}",
                                            checked: course.kind == kind,
                                            onchange: move |_| session.with_mut(|s| s.courses[index].kind = kind),
                                        }
                                        "{kind.label()}"
                                    }
                                }
                            }
                            textarea {
                                class: "field field--area",
                                rows: 5,
                                placeholder: "label: value, one per line",
                                value: "{course.data}",
                                oninput: move |evt| session.with_mut(|s| s.courses[index].data = evt.value()),
                            }
                        }
                    }
                }

                label { class: "field-label", "Course description (chef's note)" }
                textarea {
                    class: "field field--area",
                    rows: 4,
                    placeholder: "In 2–3 sentences, what story do the three charts tell together?",
                    value: "{snapshot.course_note}",
                    oninput: move |evt| session.with_mut(|s| s.course_note = evt.value()),
                }

                div { class: "lesson-card__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: plate_menu,
                        "Plate the course menu (PNG)"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: submit_logbook,
                        "Submit to the studio logbook"
                    }
                }

                match plate_status() {
                    MenuStatus::Done(message) => rsx! {
                        p { class: "callout callout--success", "✅ {message}" }
                    },
                    MenuStatus::Error(err) => rsx! {
                        p { class: "callout callout--warning", "⚠️ {err}" }
                    },
                    MenuStatus::Idle => rsx! {},
                }
                match logbook_status() {
                    MenuStatus::Done(message) => rsx! {
                        p { class: "callout callout--success", "✅ {message}" }
                    },
                    MenuStatus::Error(err) => rsx! {
                        p { class: "callout callout--warning", "⚠️ {err}" }
                    },
                    MenuStatus::Idle => rsx! {},
                }
            }

            p { class: "page__teaser",
                "Next time: we put every dish on one table and hunt for the secret recipe hiding between them — insight."
            }
        }
    }
}

fn exhibit(
    mut session: Signal<JudgingSession>,
    index: usize,
    title: &'static str,
    svg: &'static str,
    placeholder: &'static str,
) -> Element {
    let value = session.with(|s| s.critiques[index].clone());
    rsx! {
        div { class: "exhibit",
            h4 { "{title}" }
            div { class: "exhibit__chart", dangerous_inner_html: "{svg}" }
            textarea {
                class: "field field--area",
                rows: 4,
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| session.with_mut(|s| s.critiques[index] = evt.value()),
            }
        }
    }
}

// The three deliberately bad example charts. Their data never changes, so the
// markup is precomputed.

fn mystery_steak_svg() -> &'static str {
    // 45 / 30 / 25 with no title and no legend.
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 220 220' class='exhibit__svg' role='img'>\
     <path d='M 110 110 L 110 30 A 80 80 0 0 1 134.7 186.1 Z' fill='#4c78a8'/>\
     <path d='M 110 110 L 134.7 186.1 A 80 80 0 0 1 30 110 Z' fill='#f58518'/>\
     <path d='M 110 110 L 30 110 A 80 80 0 0 1 110 30 Z' fill='#e45756'/>\
     </svg>"
}

fn rubber_ruler_svg() -> &'static str {
    // 88 vs 92 drawn on an axis that starts at 85.
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 220 220' class='exhibit__svg' role='img'>\
     <rect x='45' y='146' width='50' height='54' fill='#4c78a8'/>\
     <rect x='125' y='74' width='50' height='126' fill='#4c78a8'/>\
     <line x1='30' y1='200' x2='190' y2='200' stroke='#999' stroke-width='2'/>\
     </svg>"
}

fn rainbow_bomb_svg() -> &'static str {
    // Five fruits, five shouting colors, zero emphasis.
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 220 220' class='exhibit__svg' role='img'>\
     <rect x='20' y='131' width='28' height='69' fill='#ff0000'/>\
     <rect x='58' y='97' width='28' height='103' fill='#ff9900'/>\
     <rect x='96' y='40' width='28' height='160' fill='#ffee00'/>\
     <rect x='134' y='143' width='28' height='57' fill='#33cc33'/>\
     <rect x='172' y='86' width='28' height='114' fill='#3366ff'/>\
     <line x1='10' y1='200' x2='210' y2='200' stroke='#999' stroke-width='2'/>\
     </svg>"
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::PathBuf;

    use time::OffsetDateTime;

    use crate::core::parse::parse;
    use crate::core::session::JudgingSession;
    use crate::sink::{self, SinkConfig, SubmissionRow};
    use crate::summary::chart::ChartDef;
    use crate::summary::compose::{
        compose, export_filename, StyleClass, SummaryDoc, TextBlock, CANVAS_WIDTH,
    };
    use crate::summary::fonts::StudioFace;

    /// Render the course summary PNG and save it under the export directory.
    pub fn plate_course_menu(session: &JudgingSession) -> Result<String, String> {
        let face = StudioFace::acquire().map_err(|err| err.to_string())?;
        let generated_at = OffsetDateTime::now_utc();
        let doc = build_summary_doc(session);

        let bytes =
            compose(&doc, &face, CANVAS_WIDTH, generated_at).map_err(|err| err.to_string())?;

        let dir = export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(export_filename(generated_at));
        fs::write(&path, &bytes).map_err(|err| err.to_string())?;

        tracing::info!(path = %path.display(), "course summary plated");
        Ok(format!("Course summary plated to {}", path.display()))
    }

    pub fn submit_course_menu(session: &JudgingSession) -> Result<String, String> {
        let config = SinkConfig::load_default().map_err(|err| err.to_string())?;

        let titles: Vec<String> = session
            .courses
            .iter()
            .map(|course| course_title(course).to_string())
            .collect();
        let kinds: Vec<&str> = session
            .courses
            .iter()
            .map(|course| course.kind.label())
            .collect();
        let critiques: Vec<&str> = session
            .critiques
            .iter()
            .map(|critique| critique.trim())
            .filter(|critique| !critique.is_empty())
            .collect();

        let row = SubmissionRow::new(
            OffsetDateTime::now_utc(),
            "judging",
            &titles.join(" / "),
            &kinds.join(", "),
            &critiques.join(" | "),
            &session.course_note,
            "—",
        );
        sink::append(&config, &row).map_err(|err| err.to_string())?;

        Ok("Course menu logged — three stars incoming! 🌟🌟🌟".to_string())
    }

    pub fn build_summary_doc(session: &JudgingSession) -> SummaryDoc {
        SummaryDoc {
            lead: vec![
                TextBlock::new(StyleClass::Title, "Data cook-show: today's course menu"),
                TextBlock::new(StyleClass::Body, session.checklist.digest()),
            ],
            charts: session
                .courses
                .iter()
                .map(|course| ChartDef::new(course.kind, course_title(course), parse(&course.data)))
                .collect(),
            trailing: vec![
                TextBlock::new(StyleClass::Header, "Chef's note"),
                TextBlock::new(StyleClass::Body, session.course_note.trim()),
            ],
        }
    }

    fn course_title(course: &crate::core::session::CourseChart) -> &str {
        let title = course.title.trim();
        if title.is_empty() {
            course.role
        } else {
            title
        }
    }

    fn export_dir() -> Result<PathBuf, String> {
        let dirs = directories::ProjectDirs::from("com", "DataChef", "DataChef")
            .ok_or("Unable to determine export directory")?;
        Ok(dirs.data_dir().join("exports"))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native::build_summary_doc;
    use crate::core::session::{ChartKind, JudgingSession};
    use crate::summary::compose::{compose, CANVAS_WIDTH};
    use crate::summary::testface::DotMatrixFace;
    use time::macros::datetime;

    #[test]
    fn summary_doc_falls_back_to_course_roles() {
        let mut session = JudgingSession::default();
        session.course_note = "Three charts, one story.".to_string();
        session.courses[1].title = "The main event".to_string();

        let doc = build_summary_doc(&session);
        assert_eq!(doc.charts.len(), 3);
        assert_eq!(doc.charts[0].title, "Appetizer");
        assert_eq!(doc.charts[1].title, "The main event");
        assert_eq!(doc.charts[2].title, "Dessert");
        assert_eq!(doc.charts[2].kind, ChartKind::Pie);
    }

    #[test]
    fn empty_courses_with_a_note_still_render() {
        let mut session = JudgingSession::default();
        session.course_note = "Placeholders are fine.".to_string();

        let doc = build_summary_doc(&session);
        assert!(doc.charts.iter().all(|chart| chart.series.is_empty()));

        let bytes = compose(
            &doc,
            &DotMatrixFace,
            CANVAS_WIDTH,
            datetime!(2026-08-07 10:00:00 UTC),
        )
        .expect("placeholders compose");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn course_data_flows_into_chart_series() {
        let mut session = JudgingSession::default();
        session.course_note = "note".to_string();
        session.courses[0].data = "돈까스: 12\n스파게티: 7".to_string();

        let doc = build_summary_doc(&session);
        assert_eq!(doc.charts[0].series.len(), 2);
        assert_eq!(doc.charts[0].series[0].label, "돈까스");
    }
}
