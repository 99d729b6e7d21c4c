use dioxus::prelude::*;

use crate::charts::{RadarChart, RadarSeries, RadarSpec, SERIES_COLORS};
use crate::components::{data_table::score_bucket, DeltaTone, MetricCard, StateSelect};
use crate::core::data::{AtlasData, SnapshotMetric, StateSnapshotRow, STATES};
use crate::core::format::{format_score, format_signed_percent, format_signed_points};
use crate::core::stats::metric_difference;

/// Columns compared side by side: the three headline metrics plus overall.
const COMPARED_METRICS: [SnapshotMetric; 4] = [
    SnapshotMetric::EnrollmentCompleteness,
    SnapshotMetric::ClaimsAccuracy,
    SnapshotMetric::ProviderQuality,
    SnapshotMetric::OverallScore,
];

/// One line of the detailed comparison table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ComparisonRow {
    pub metric: &'static str,
    pub left: u32,
    pub right: u32,
    pub difference: i64,
}

#[component]
pub fn Comparisons() -> Element {
    let data = use_context::<AtlasData>();
    let state_one = use_signal(|| STATES[0].to_string());
    let state_two = use_signal(|| STATES[1].to_string());

    let left = data.snapshot.iter().find(|r| r.state == state_one());
    let right = data.snapshot.iter().find(|r| r.state == state_two());

    // The selects only offer known states, so both lookups succeed; the
    // placeholder is the honest fallback if that ever changes.
    let (Some(left), Some(right)) = (left, right) else {
        return rsx! {
            section { class: "page page-comparisons",
                h1 { "State-by-State Comparisons" }
                p { class: "chart__placeholder", "Selected state not found in the snapshot table." }
            }
        };
    };

    let cards: Vec<(&'static str, String, String, DeltaTone)> = COMPARED_METRICS
        .iter()
        .map(|metric| {
            let diff = metric_difference(left, right, *metric);
            (
                metric.label(),
                format_score(metric.value(left)),
                format!("{} vs {}", format_signed_percent(diff as f64), right.state),
                DeltaTone::from_value(diff as f64),
            )
        })
        .collect();

    let table_rows = comparison_rows(left, right);
    let radar = radar_spec(left, right);
    let left_name = left.state.clone();
    let right_name = right.state.clone();

    rsx! {
        section { class: "page page-comparisons",
            h1 { "State-by-State Comparisons" }
            p { "Compare data quality metrics between selected states." }

            div { class: "filter-row",
                StateSelect {
                    label: "Select First State:",
                    selected: state_one,
                    id: "state-one-select",
                }
                StateSelect {
                    label: "Select Second State:",
                    selected: state_two,
                    id: "state-two-select",
                }
            }

            h2 { "Quick Comparison" }
            div { class: "metric-row",
                for (label, value, delta, tone) in cards.into_iter() {
                    MetricCard {
                        label: "{label}",
                        value: "{value}",
                        delta: "{delta}",
                        tone,
                    }
                }
            }

            hr {}

            h2 { "Comprehensive Comparison" }
            RadarChart { spec: radar }

            h2 { "Detailed Metrics" }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Metric" }
                            th { "{left_name}" }
                            th { "{right_name}" }
                            th { "Difference" }
                        }
                    }
                    tbody {
                        for row in table_rows.iter() {
                            tr {
                                td { class: "data-table__state", "{row.metric}" }
                                td { class: score_bucket(row.left), "{row.left}" }
                                td { class: score_bucket(row.right), "{row.right}" }
                                td { class: "data-table__difference",
                                    "{format_signed_points(row.difference)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Signed per-metric differences, left minus right.
pub(crate) fn comparison_rows(
    left: &StateSnapshotRow,
    right: &StateSnapshotRow,
) -> Vec<ComparisonRow> {
    COMPARED_METRICS
        .iter()
        .map(|metric| ComparisonRow {
            metric: metric.label(),
            left: metric.value(left),
            right: metric.value(right),
            difference: metric_difference(left, right, *metric),
        })
        .collect()
}

/// Two filled polygons over the four sub-score categories.
pub(crate) fn radar_spec(left: &StateSnapshotRow, right: &StateSnapshotRow) -> RadarSpec {
    let series = |row: &StateSnapshotRow, color| RadarSeries {
        name: row.state.clone(),
        color,
        values: SnapshotMetric::SUB_SCORES
            .iter()
            .map(|m| m.value(row) as f64)
            .collect(),
    };

    RadarSpec {
        title: "Radar Chart Comparison".to_string(),
        categories: SnapshotMetric::SUB_SCORES
            .iter()
            .map(|m| m.label().to_string())
            .collect(),
        series: vec![
            series(left, SERIES_COLORS[0]),
            series(right, SERIES_COLORS[1]),
        ],
        max_value: 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sample_snapshot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows() -> Vec<StateSnapshotRow> {
        sample_snapshot(&mut StdRng::seed_from_u64(61))
    }

    #[test]
    fn differences_are_left_minus_right_exactly() {
        let rows = rows();
        let table = comparison_rows(&rows[0], &rows[1]);
        assert_eq!(table.len(), 4);
        for row in &table {
            assert_eq!(row.difference, row.left as i64 - row.right as i64);
        }
    }

    #[test]
    fn comparing_a_state_with_itself_zeroes_the_difference_column() {
        let rows = rows();
        let texas_stand_in = &rows[3];
        for row in comparison_rows(texas_stand_in, texas_stand_in) {
            assert_eq!(row.difference, 0);
            assert_eq!(row.left, row.right);
        }
    }

    #[test]
    fn radar_spec_covers_the_four_sub_scores_for_both_states() {
        let rows = rows();
        let spec = radar_spec(&rows[0], &rows[1]);
        assert_eq!(spec.categories.len(), 4);
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].values.len(), 4);
        assert_eq!(spec.series[0].name, rows[0].state);
        assert_eq!(spec.series[1].name, rows[1].state);
        assert_eq!(spec.max_value, 100.0);
    }
}
