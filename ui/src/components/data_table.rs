use dioxus::prelude::*;

use crate::core::data::{SnapshotMetric, StateSnapshotRow};

/// Tint bucket for a score cell, approximating a red→green gradient over the
/// displayed score range without inline styles.
pub(crate) fn score_bucket(score: u32) -> &'static str {
    match score {
        s if s >= 94 => "score-cell score-cell--best",
        s if s >= 88 => "score-cell score-cell--good",
        s if s >= 82 => "score-cell score-cell--fair",
        s if s >= 76 => "score-cell score-cell--weak",
        _ => "score-cell score-cell--poor",
    }
}

/// The per-state scores table shown on the dashboard.
#[component]
pub fn SnapshotTable(rows: Vec<StateSnapshotRow>) -> Element {
    rsx! {
        div { class: "data-table__wrap",
            if rows.is_empty() {
                p { class: "data-table__placeholder",
                    "No states match the current filters."
                }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "State" }
                            for metric in SnapshotMetric::SUB_SCORES {
                                th { "{metric.label()}" }
                            }
                            th { "Overall Score" }
                            th { "Quality Rating" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                td { class: "data-table__state", "{row.state}" }
                                for metric in SnapshotMetric::SUB_SCORES {
                                    td { class: score_bucket(metric.value(row)),
                                        "{metric.value(row)}"
                                    }
                                }
                                td { class: score_bucket(row.overall_score), "{row.overall_score}" }
                                td {
                                    span { class: row.rating().css_class(), "{row.rating().label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
