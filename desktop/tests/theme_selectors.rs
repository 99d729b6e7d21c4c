#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (cards,
  selectors, charts, tables, export panel) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop
  builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to
  the shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (charts, tables, filter widgets, etc).
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
    ".info-box",
    ".feature-columns",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    // Metric cards
    ".metric-row",
    ".metric-card",
    ".metric-card__label",
    ".metric-card__value",
    ".metric-card__delta--up",
    ".metric-card__delta--down",
    // Filter widgets
    ".filter-row",
    ".selector {",
    ".selector--multi",
    ".selector__option",
    // Tabs
    ".tab-row",
    ".tab--active",
    // Charts
    ".chart {",
    ".chart__title",
    ".chart__legend-swatch",
    ".chart__canvas",
    ".chart__tick",
    ".chart__placeholder",
    ".chart--radar",
    // Data tables
    ".data-table {",
    ".data-table__state",
    ".data-table__difference",
    ".score-cell--best",
    ".score-cell--poor",
    ".rating-badge--low",
    ".rating-badge--high",
    // Export panel
    ".export-panel__actions",
    ".export-panel__meta--error",
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
fn score_bucket_classes_form_a_complete_ladder() {
    for bucket in ["best", "good", "fair", "weak", "poor"] {
        let class = format!(".score-cell--{bucket}");
        assert!(
            THEME_CSS.contains(&class),
            "Score bucket `{class}` missing from unified theme"
        );
    }
}
