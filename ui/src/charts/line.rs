//! Single- and multi-series line chart for the monthly trend series.

use dioxus::prelude::*;

use super::{label_stride, legend};

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub title: String,
    /// Month badges, one per x position; all series share this axis.
    pub x_labels: Vec<String>,
    pub series: Vec<LineSeries>,
    pub y_label: String,
}

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 420.0;
const PLOT_LEFT: f64 = 52.0;
const PLOT_TOP: f64 = 16.0;
const PLOT_WIDTH: f64 = 830.0;
const PLOT_HEIGHT: f64 = 330.0;
const PLOT_RIGHT: f64 = PLOT_LEFT + PLOT_WIDTH;
const BASELINE: f64 = PLOT_TOP + PLOT_HEIGHT;
const TICK_X: f64 = PLOT_LEFT - 8.0;

struct Polyline {
    points: String,
    color: &'static str,
}

struct GridLine {
    y: f64,
    label_y: f64,
    label: String,
}

struct Tick {
    x: f64,
    y: f64,
    rotate: String,
    label: String,
}

#[component]
pub fn LineChart(spec: LineChartSpec) -> Element {
    let legend_entries: Vec<(String, &'static str)> = spec
        .series
        .iter()
        .map(|s| (s.name.clone(), s.color))
        .collect();

    let (y_min, y_max) = y_bounds(&spec.series);
    let count = spec.x_labels.len();

    let polylines: Vec<Polyline> = spec
        .series
        .iter()
        .map(|series| Polyline {
            points: polyline_points(&series.values, y_min, y_max),
            color: series.color,
        })
        .collect();

    let grid_steps = 5usize;
    let gridlines: Vec<GridLine> = (0..=grid_steps)
        .map(|step| {
            let value = y_min + (y_max - y_min) * step as f64 / grid_steps as f64;
            let y = scale_y(value, y_min, y_max);
            GridLine {
                y,
                label_y: y + 4.0,
                label: format!("{value:.0}"),
            }
        })
        .collect();

    let stride = label_stride(count);
    let ticks: Vec<Tick> = spec
        .x_labels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, label)| {
            let x = scale_x(i, count);
            let y = BASELINE + 14.0;
            Tick {
                x,
                y,
                rotate: format!("rotate(-45 {x} {y})"),
                label: label.clone(),
            }
        })
        .collect();

    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{spec.title}" }
            {legend(&legend_entries)}

            if count == 0 {
                p { class: "chart__placeholder", "No trend history available." }
            } else {
                svg {
                    class: "chart__canvas",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    preserve_aspect_ratio: "xMidYMid meet",

                    for grid in gridlines.iter() {
                        line {
                            x1: "{PLOT_LEFT}",
                            y1: "{grid.y}",
                            x2: "{PLOT_RIGHT}",
                            y2: "{grid.y}",
                            stroke: "#e3e8ef",
                            stroke_width: "1",
                        }
                        text {
                            x: "{TICK_X}",
                            y: "{grid.label_y}",
                            text_anchor: "end",
                            class: "chart__tick",
                            "{grid.label}"
                        }
                    }

                    for poly in polylines.iter() {
                        polyline {
                            points: "{poly.points}",
                            fill: "none",
                            stroke: "{poly.color}",
                            stroke_width: "2.5",
                        }
                    }

                    for tick in ticks.iter() {
                        text {
                            x: "{tick.x}",
                            y: "{tick.y}",
                            text_anchor: "end",
                            class: "chart__tick",
                            transform: "{tick.rotate}",
                            "{tick.label}"
                        }
                    }
                }
                p { class: "chart__axis-label", "{spec.y_label}" }
            }
        }
    }
}

fn scale_x(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return PLOT_LEFT + PLOT_WIDTH / 2.0;
    }
    PLOT_LEFT + index as f64 / (count - 1) as f64 * PLOT_WIDTH
}

fn scale_y(value: f64, y_min: f64, y_max: f64) -> f64 {
    let span = (y_max - y_min).max(f64::EPSILON);
    BASELINE - ((value - y_min) / span).clamp(0.0, 1.0) * PLOT_HEIGHT
}

fn polyline_points(values: &[f64], y_min: f64, y_max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = scale_x(i, values.len());
            let y = scale_y(*value, y_min, y_max);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Data extent snapped outward to multiples of five, so the axis breathes a
/// little above and below the lines.
fn y_bounds(series: &[LineSeries]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for v in &s.values {
            min = min.min(*v);
            max = max.max(*v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 100.0);
    }
    let low = (min / 5.0).floor() * 5.0;
    let high = (max / 5.0).ceil() * 5.0;
    if low == high {
        (low - 5.0, high + 5.0)
    } else {
        (low, high)
    }
}
