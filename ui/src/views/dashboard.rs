use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::charts::{
    BarChartSpec, BarSeries, GroupedBarChart, Heatmap, HeatmapSpec, Histogram, HistogramSpec,
    SERIES_COLORS,
};
use crate::components::{ExportPanel, MetricCard, RatingSelect, SnapshotTable, StateMultiSelect};
use crate::core::data::{AtlasData, SnapshotMetric, StateSnapshotRow, STATES};
use crate::core::filter::{filter_snapshot, RatingFilter};
use crate::core::format::format_percent;
use crate::core::stats::metric_mean;

/// Which of the three visualization tabs is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ChartTab {
    #[default]
    Bar,
    Heatmap,
    Distribution,
}

impl ChartTab {
    const ALL: [Self; 3] = [Self::Bar, Self::Heatmap, Self::Distribution];

    fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Heatmap => "Heatmap",
            Self::Distribution => "Distribution",
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let data = use_context::<AtlasData>();
    let selected_states = use_signal(default_states);
    let rating = use_signal(RatingFilter::default);
    let mut tab = use_signal(ChartTab::default);

    let filtered = filter_snapshot(&data.snapshot, &selected_states(), rating());
    debug!("dashboard filter pass kept {} rows", filtered.len());

    let summary_cards: Vec<(&str, String)> = [
        ("Avg Enrollment Quality", SnapshotMetric::EnrollmentCompleteness),
        ("Avg Claims Accuracy", SnapshotMetric::ClaimsAccuracy),
        ("Avg Provider Quality", SnapshotMetric::ProviderQuality),
        ("Avg Overall Score", SnapshotMetric::OverallScore),
    ]
    .into_iter()
    .map(|(label, metric)| (label, format_percent(metric_mean(&filtered, metric))))
    .collect();

    let active_tab = tab();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Data Quality Dashboard" }
            p { "Explore comprehensive data quality assessments across states." }

            div { class: "filter-row",
                StateMultiSelect { selected: selected_states }
                RatingSelect { selected: rating }
            }

            h2 { "Summary Statistics" }
            div { class: "metric-row",
                for (label, value) in summary_cards.into_iter() {
                    MetricCard { label: "{label}", value: "{value}" }
                }
            }

            hr {}

            h2 { "State Data Quality Scores" }
            SnapshotTable { rows: filtered.clone() }

            ExportPanel { rows: filtered.clone() }

            hr {}

            h2 { "Data Quality Visualizations" }
            div { class: "tab-row", role: "tablist",
                for choice in ChartTab::ALL {
                    button {
                        r#type: "button",
                        role: "tab",
                        class: if choice == active_tab { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(choice),
                        "{choice.label()}"
                    }
                }
            }

            match active_tab {
                ChartTab::Bar => rsx! {
                    GroupedBarChart { spec: bar_spec(&filtered) }
                },
                ChartTab::Heatmap => rsx! {
                    Heatmap { spec: heatmap_spec(&filtered) }
                },
                ChartTab::Distribution => rsx! {
                    Histogram { spec: histogram_spec(&filtered) }
                },
            }
        }
    }
}

/// The first five states, matching the multiselect default.
fn default_states() -> Vec<String> {
    STATES.iter().take(5).map(|s| (*s).to_string()).collect()
}

/// Grouped bars: the three headline metrics per state.
pub(crate) fn bar_spec(rows: &[StateSnapshotRow]) -> BarChartSpec {
    BarChartSpec {
        title: "Data Quality Metrics by State".to_string(),
        x_labels: rows.iter().map(|r| r.state.clone()).collect(),
        series: SnapshotMetric::HEADLINE
            .iter()
            .zip(SERIES_COLORS)
            .map(|(metric, color)| BarSeries {
                name: metric.label().to_string(),
                color,
                values: rows.iter().map(|r| metric.value(r) as f64).collect(),
            })
            .collect(),
        y_max: 100.0,
    }
}

/// Heatmap transposed the way the dashboard presents it: metrics as rows,
/// states as columns.
pub(crate) fn heatmap_spec(rows: &[StateSnapshotRow]) -> HeatmapSpec {
    HeatmapSpec {
        title: "Data Quality Heatmap".to_string(),
        row_labels: SnapshotMetric::SUB_SCORES
            .iter()
            .map(|m| m.label().to_string())
            .collect(),
        col_labels: rows.iter().map(|r| r.state.clone()).collect(),
        values: SnapshotMetric::SUB_SCORES
            .iter()
            .map(|metric| rows.iter().map(|r| metric.value(r) as f64).collect())
            .collect(),
        domain: (70.0, 100.0),
    }
}

/// Distribution of the overall score over a fixed 20-bin partition.
pub(crate) fn histogram_spec(rows: &[StateSnapshotRow]) -> HistogramSpec {
    HistogramSpec {
        title: "Distribution of Overall Quality Scores".to_string(),
        values: rows.iter().map(|r| r.overall_score as f64).collect(),
        bins: 20,
        color: SERIES_COLORS[0],
        x_label: "Quality Score".to_string(),
    }
}
