use dioxus::prelude::*;

use crate::charts::{LineChart, LineChartSpec, LineSeries, SERIES_COLORS};
use crate::components::{DeltaTone, MetricCard, MetricView, MetricViewSelect};
use crate::core::data::{AtlasData, TrendMetric, TrendPoint};
use crate::core::format::{format_month, format_percent, format_signed_percent};
use crate::core::stats::latest_with_six_month_delta;

/// Fixed year-over-year illustration shown under the chart. Not derived from
/// the generated series.
const YOY_ROWS: [(&str, f64, f64, &str); 3] = [
    ("Enrollment", 87.5, 89.2, "+1.7%"),
    ("Claims", 84.3, 86.1, "+1.8%"),
    ("Provider", 91.2, 92.8, "+1.6%"),
];

#[component]
pub fn Trends() -> Element {
    let data = use_context::<AtlasData>();
    let view = use_signal(MetricView::default);

    let chart = trend_chart_spec(&data.trends, view());

    let cards: Vec<(&'static str, String, String, DeltaTone)> = TrendMetric::ALL
        .iter()
        .map(|metric| {
            let (latest, delta) = latest_with_six_month_delta(&data.trends, *metric);
            let (delta_text, tone) = match delta {
                Ok(value) => (
                    format!("{} (6M)", format_signed_percent(value)),
                    DeltaTone::from_value(value),
                ),
                Err(err) => (err.to_string(), DeltaTone::Neutral),
            };
            (metric.label(), format_percent(latest), delta_text, tone)
        })
        .collect();

    rsx! {
        section { class: "page page-trends",
            h1 { "Data Quality Trends Over Time" }
            p { "Analyze how data quality metrics have evolved over time." }

            div { class: "filter-row",
                MetricViewSelect { selected: view }
            }

            h2 { "Historical Trends" }
            LineChart { spec: chart }

            hr {}

            h2 { "Trend Statistics" }
            div { class: "metric-row",
                for (label, value, delta, tone) in cards.into_iter() {
                    MetricCard {
                        label: "Latest {label} Score",
                        value: "{value}",
                        delta: "{delta}",
                        tone,
                    }
                }
            }

            hr {}

            h2 { "Year-over-Year Comparison" }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Metric" }
                            th { "2023 Average" }
                            th { "2024 Average" }
                            th { "Change" }
                        }
                    }
                    tbody {
                        for (metric, avg_2023, avg_2024, change) in YOY_ROWS {
                            tr {
                                td { class: "data-table__state", "{metric}" }
                                td { "{avg_2023}" }
                                td { "{avg_2024}" }
                                td { class: "data-table__difference", "{change}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Line chart over the full generated window: three series for "All Metrics",
/// one for a single-metric view. The x axis is identical either way.
pub(crate) fn trend_chart_spec(points: &[TrendPoint], view: MetricView) -> LineChartSpec {
    let x_labels: Vec<String> = points.iter().map(|p| format_month(p.month)).collect();

    let series_for = |metric: TrendMetric, color: &'static str| LineSeries {
        name: metric.label().to_string(),
        color,
        values: points.iter().map(|p| metric.value(p)).collect(),
    };

    let (title, series) = match view {
        MetricView::AllMetrics => (
            "Data Quality Trends (All Metrics)".to_string(),
            TrendMetric::ALL
                .iter()
                .zip(SERIES_COLORS)
                .map(|(metric, color)| series_for(*metric, color))
                .collect(),
        ),
        MetricView::Single(metric) => (
            format!("Data Quality Trend - {}", metric.label()),
            vec![series_for(metric, SERIES_COLORS[0])],
        ),
    };

    LineChartSpec {
        title,
        x_labels,
        series,
        y_label: "Quality Score (%)".to_string(),
    }
}
