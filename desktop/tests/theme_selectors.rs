#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the lesson
  cards, field widgets, previews, and callouts) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__teaser",
    // Navbar
    ".navbar__inner",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".field {",
    ".field--area",
    ".field-label",
    // Cards & callouts
    ".lesson-card",
    ".lesson-card__actions",
    ".callout--note",
    ".callout--info",
    ".callout--success",
    ".callout--warning",
    // Pantry widgets
    ".pantry-examples",
    ".rule-row",
    ".rule-row__arrow",
    ".countif-row",
    ".countif-row__criteria",
    // Plating widgets
    ".plating-compare",
    ".chart-kind-picker",
    ".chart-preview",
    ".mission-row",
    ".upload-preview",
    // Judging widgets
    ".exhibit",
    ".exhibit__chart",
    ".upgrade-checklist",
    ".course-row",
    ".course-card",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn callout_variants_stay_paired() {
    // Every status message the views emit needs its callout variant.
    for variant in ["note", "info", "success", "warning"] {
        assert!(
            THEME_CSS.contains(&format!(".callout--{variant}")),
            "callout variant `{variant}` missing"
        );
    }
}
