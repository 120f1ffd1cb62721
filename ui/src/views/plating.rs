use dioxus::prelude::*;

use crate::core::parse::{parse, DataPoint};
use crate::core::session::{ChartKind, PlatingSession, UploadBlob};
use crate::summary::chart::{bar_layout, slice_spans};
use crate::summary::{palette_hex, Rect};

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Lesson 2 — taste the difference a chart makes, pick recipes for two
/// missions, and plate the team's first signature dish.
#[component]
pub fn Plating() -> Element {
    let mut session = use_signal(PlatingSession::default);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let snapshot = session();
    let series = parse(&snapshot.raw_data);
    let preview = match snapshot.chart_kind {
        ChartKind::Bar => bar_preview_svg(&series),
        ChartKind::Pie => pie_preview_svg(&series),
    };

    let submit_dish = move |_| {
        if let Err(warning) = session.with(|s| s.submission_ready()) {
            status.set(SubmitStatus::Error(warning.to_string()));
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match native::submit_signature_dish(&session()) {
                Ok(message) => status.set(SubmitStatus::Done(message)),
                Err(err) => status.set(SubmitStatus::Error(err)),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            status.set(SubmitStatus::Error(
                "Logbook submission needs the desktop studio build.".to_string(),
            ));
        }
    };

    rsx! {
        section { class: "page page-plating",
            h1 { "Plating: your first signature dish 📊" }
            p { "Nobody eats raw potatoes. Plating — visualization — is what makes the data delicious." }

            div { class: "lesson-card",
                h2 { "🧐 Activity 1: bland show vs. tasty show" }
                p {
                    "Scene A is the raw ingredient list; scene B is the plated dish. "
                    "Edit the data on the left and taste the difference on the right."
                }

                div { class: "plating-compare",
                    div { class: "plating-compare__pane",
                        h3 { "Scene A: the ingredient list" }
                        textarea {
                            class: "field field--area",
                            rows: 9,
                            placeholder: "label: value, one per line",
                            value: "{snapshot.raw_data}",
                            oninput: move |evt| session.with_mut(|s| s.raw_data = evt.value()),
                        }
                    }
                    div { class: "plating-compare__pane",
                        h3 { "Scene B: the plated dish" }
                        div { class: "chart-kind-picker",
                            for kind in ChartKind::all() {
                                label { class: "chart-kind-picker__option",
                                    input {
                                        r#type: "radio",
                                        name: "preview-kind",
                                        checked: snapshot.chart_kind == kind,
                                        onchange: move |_| session.with_mut(|s| s.chart_kind = kind),
                                    }
                                    "{kind.label()}"
                                }
                            }
                        }
                        if series.is_empty() {
                            p { class: "callout callout--warning",
                                "Enter at least one valid 'label: value' line to plate a chart."
                            }
                        } else {
                            div { class: "chart-preview", dangerous_inner_html: "{preview}" }
                        }
                    }
                }
            }

            div { class: "lesson-card",
                h2 { "🛠️ Activity 2: pick the best recipe" }
                p { "Not every dish suits every recipe. Decide which chart fits each mission and say why." }

                h3 { "Mission A: top 5 lunch menus" }
                p { class: "callout callout--info",
                    "\"I want to compare the popularity ranking of the top 5 lunch menus at a glance.\""
                }
                div { class: "mission-row",
                    div { class: "chart-kind-picker",
                        for kind in ChartKind::all() {
                            label { class: "chart-kind-picker__option",
                                input {
                                    r#type: "radio",
                                    name: "mission-a",
                                    checked: snapshot.mission_a.kind == kind,
                                    onchange: move |_| session.with_mut(|s| s.mission_a.kind = kind),
                                }
                                "{kind.label()}"
                            }
                        }
                    }
                    input {
                        class: "field mission-row__reason",
                        placeholder: "e.g. ranking is a height contest, so…",
                        value: "{snapshot.mission_a.reason}",
                        oninput: move |evt| session.with_mut(|s| s.mission_a.reason = evt.value()),
                    }
                }

                h3 { "Mission B: class gender ratio" }
                p { class: "callout callout--info",
                    "\"I want to show what share of the class is boys vs. girls.\""
                }
                div { class: "mission-row",
                    div { class: "chart-kind-picker",
                        for kind in ChartKind::all() {
                            label { class: "chart-kind-picker__option",
                                input {
                                    r#type: "radio",
                                    name: "mission-b",
                                    checked: snapshot.mission_b.kind == kind,
                                    onchange: move |_| session.with_mut(|s| s.mission_b.kind = kind),
                                }
                                "{kind.label()}"
                            }
                        }
                    }
                    input {
                        class: "field mission-row__reason",
                        placeholder: "e.g. shares of a whole want a pie, so…",
                        value: "{snapshot.mission_b.reason}",
                        oninput: move |evt| session.with_mut(|s| s.mission_b.reason = evt.value()),
                    }
                }
            }

            div { class: "lesson-card",
                h2 { "🎯 Today's challenge: serve the signature dish" }
                p { "Name the dish, plate it, and tell the viewers what it means." }

                label { class: "field-label", "Dish (chart) name" }
                input {
                    class: "field",
                    placeholder: "e.g. Undisputed! The king of our school lunch",
                    value: "{snapshot.dish_title}",
                    oninput: move |evt| session.with_mut(|s| s.dish_title = evt.value()),
                }

                label { class: "field-label", "Plating photo (chart capture, PNG/JPEG)" }
                input {
                    r#type: "file",
                    class: "field field--file",
                    accept: ".png,.jpg,.jpeg",
                    onchange: move |evt| {
                        if let Some(file_engine) = evt.files() {
                            spawn(async move {
                                for file_name in file_engine.files() {
                                    if let Some(bytes) = file_engine.read_file(&file_name).await {
                                        session.with_mut(|s| {
                                            s.upload = Some(UploadBlob::new(file_name.clone(), bytes));
                                        });
                                    }
                                }
                            });
                        }
                    },
                }
                if let Some(upload) = snapshot.upload.as_ref() {
                    figure { class: "upload-preview",
                        img { src: "{upload.data_url()}", alt: "uploaded signature dish" }
                        figcaption { "Uploaded: {upload.name} ✨" }
                    }
                }

                label { class: "field-label", "Chef's note (what the chart says)" }
                textarea {
                    class: "field field--area",
                    rows: 4,
                    placeholder: "e.g. half the school loves 돈까스 more than anything else on the menu.",
                    value: "{snapshot.dish_note}",
                    oninput: move |evt| session.with_mut(|s| s.dish_note = evt.value()),
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: submit_dish,
                    "Submit the cook-show trailer!"
                }

                match status() {
                    SubmitStatus::Done(message) => rsx! {
                        p { class: "callout callout--success", "✅ {message}" }
                    },
                    SubmitStatus::Error(err) => rsx! {
                        p { class: "callout callout--warning", "⚠️ {err}" }
                    },
                    SubmitStatus::Idle => rsx! {},
                }
            }
        }
    }
}

const PREVIEW_W: f32 = 460.0;
const PREVIEW_H: f32 = 280.0;

fn svg_open() -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {PREVIEW_W} {PREVIEW_H}' \
         class='chart-preview__svg' role='img'>"
    )
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn bar_preview_svg(series: &[DataPoint]) -> String {
    let plot = Rect::new(20.0, 16.0, PREVIEW_W - 40.0, PREVIEW_H - 64.0);
    let mut svg = svg_open();
    for (index, bar) in bar_layout(series, plot).iter().enumerate() {
        svg.push_str(&format!(
            "<rect x='{:.1}' y='{:.1}' width='{:.1}' height='{:.1}' rx='3' fill='{}'/>",
            bar.x,
            bar.y,
            bar.w,
            bar.h,
            palette_hex(index)
        ));
        svg.push_str(&format!(
            "<text x='{:.1}' y='{:.1}' text-anchor='middle' font-size='13' fill='#3a2c20'>{}</text>",
            bar.x + bar.w / 2.0,
            plot.bottom() + 20.0,
            escape_xml(&series[index].label)
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn pie_preview_svg(series: &[DataPoint]) -> String {
    let cx = PREVIEW_W / 2.0;
    let cy = PREVIEW_H / 2.0;
    let radius = (PREVIEW_H / 2.0 - 24.0).max(1.0);

    let mut svg = svg_open();
    let spans = slice_spans(series);
    for (index, (start, sweep)) in spans.iter().enumerate() {
        if *sweep <= 0.0 {
            continue;
        }
        if *sweep >= 359.99 {
            svg.push_str(&format!(
                "<circle cx='{cx:.1}' cy='{cy:.1}' r='{radius:.1}' fill='{}'/>",
                palette_hex(index)
            ));
            continue;
        }
        let (x0, y0) = arc_point(cx, cy, radius, *start);
        let (x1, y1) = arc_point(cx, cy, radius, start + sweep);
        let large_arc = i32::from(*sweep > 180.0);
        svg.push_str(&format!(
            "<path d='M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} \
             A {radius:.1} {radius:.1} 0 {large_arc} 1 {x1:.1} {y1:.1} Z' fill='{}'/>",
            palette_hex(index)
        ));
    }
    svg.push_str("</svg>");
    svg
}

// Screen coordinates: y grows downward, so clockwise sweeps map directly to
// increasing angles.
fn arc_point(cx: f32, cy: f32, radius: f32, angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use time::OffsetDateTime;

    use crate::core::session::PlatingSession;
    use crate::sink::{self, SinkConfig, SubmissionRow};

    pub fn submit_signature_dish(session: &PlatingSession) -> Result<String, String> {
        let config = SinkConfig::load_default().map_err(|err| err.to_string())?;

        let reasons = format!(
            "Mission A ({}): {} | Mission B ({}): {}",
            session.mission_a.kind.label(),
            session.mission_a.reason.trim(),
            session.mission_b.kind.label(),
            session.mission_b.reason.trim(),
        );
        let upload_name = session
            .upload
            .as_ref()
            .map(|upload| upload.name.as_str())
            .unwrap_or("—");

        let row = SubmissionRow::new(
            OffsetDateTime::now_utc(),
            "plating",
            &session.dish_title,
            session.chart_kind.label(),
            &reasons,
            &session.dish_note,
            upload_name,
        );
        sink::append(&config, &row).map_err(|err| err.to_string())?;

        Ok("Signature dish logged — the next episode is already in demand!".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse;

    #[test]
    fn bar_preview_contains_one_rect_per_point() {
        let series = parse("국어: 15\n수학: 10");
        let svg = bar_preview_svg(&series);
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("국어"));
    }

    #[test]
    fn pie_preview_uses_paths_for_partial_slices() {
        let series = parse("a: 1\nb: 3");
        let svg = pie_preview_svg(&series);
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn single_point_pie_is_a_full_circle() {
        let series = parse("only: 5");
        let svg = pie_preview_svg(&series);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn labels_are_escaped_for_markup() {
        assert_eq!(escape_xml("a<b&c>"), "a&lt;b&amp;c&gt;");
    }
}
