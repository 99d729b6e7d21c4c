//! Grouped bar chart (metrics side by side per state).

use dioxus::prelude::*;

use super::legend;

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_labels: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Top of the y axis; scores use 100.
    pub y_max: f64,
}

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 430.0;
const PLOT_LEFT: f64 = 52.0;
const PLOT_TOP: f64 = 16.0;
const PLOT_WIDTH: f64 = 830.0;
const PLOT_HEIGHT: f64 = 330.0;
const PLOT_RIGHT: f64 = PLOT_LEFT + PLOT_WIDTH;
const TICK_X: f64 = PLOT_LEFT - 8.0;

struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
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
pub fn GroupedBarChart(spec: BarChartSpec) -> Element {
    let groups = spec.x_labels.len();
    let legend_entries: Vec<(String, &'static str)> = spec
        .series
        .iter()
        .map(|s| (s.name.clone(), s.color))
        .collect();

    let baseline = PLOT_TOP + PLOT_HEIGHT;
    let y = |value: f64| baseline - (value / spec.y_max).clamp(0.0, 1.0) * PLOT_HEIGHT;

    let gridlines: Vec<GridLine> = [0.0, 25.0, 50.0, 75.0, 100.0]
        .into_iter()
        .map(|value| GridLine {
            y: y(value),
            label_y: y(value) + 4.0,
            label: format!("{value:.0}"),
        })
        .collect();

    let slots = spec.series.len().max(1);
    let mut bars = Vec::new();
    for (slot, series) in spec.series.iter().enumerate() {
        for (group, value) in series.values.iter().enumerate() {
            let top = y(*value);
            bars.push(Bar {
                x: bar_x(group, groups, slot, slots),
                y: top,
                width: bar_slot_width(groups, slots),
                height: baseline - top,
                color: series.color,
            });
        }
    }

    let ticks: Vec<Tick> = spec
        .x_labels
        .iter()
        .enumerate()
        .map(|(group, label)| {
            let x = group_center(group, groups);
            let y = baseline + 14.0;
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

            if groups == 0 {
                p { class: "chart__placeholder", "No states match the current filters." }
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

                    for bar in bars.iter() {
                        rect {
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: bar.color,
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
            }
        }
    }
}

fn group_width(groups: usize) -> f64 {
    PLOT_WIDTH / groups.max(1) as f64
}

fn group_center(group: usize, groups: usize) -> f64 {
    PLOT_LEFT + (group as f64 + 0.5) * group_width(groups)
}

/// Bars fill 80% of their group; the rest is padding between groups.
fn bar_slot_width(groups: usize, slots: usize) -> f64 {
    group_width(groups) * 0.8 / slots as f64
}

fn bar_x(group: usize, groups: usize, slot: usize, slots: usize) -> f64 {
    let start = PLOT_LEFT + group as f64 * group_width(groups) + group_width(groups) * 0.1;
    start + slot as f64 * bar_slot_width(groups, slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_within_a_group_stay_inside_it() {
        let groups = 5;
        let slots = 3;
        let left = bar_x(2, groups, 0, slots);
        let right = bar_x(2, groups, slots - 1, slots) + bar_slot_width(groups, slots);
        assert!(left >= PLOT_LEFT + 2.0 * group_width(groups));
        assert!(right <= PLOT_LEFT + 3.0 * group_width(groups));
    }

    #[test]
    fn group_centers_are_evenly_spaced() {
        let step = group_center(1, 10) - group_center(0, 10);
        assert!((step - group_width(10)).abs() < 1e-9);
    }
}
