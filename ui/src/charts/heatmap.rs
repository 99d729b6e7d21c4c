//! Metric × state heatmap with a red→yellow→green score ramp.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapSpec {
    pub title: String,
    /// Metric names, one per heatmap row.
    pub row_labels: Vec<String>,
    /// State names, one per column.
    pub col_labels: Vec<String>,
    /// `values[row][col]`, matching the label vectors.
    pub values: Vec<Vec<f64>>,
    /// Color scale domain; scores use (70, 100).
    pub domain: (f64, f64),
}

const WIDTH: f64 = 900.0;
const PLOT_LEFT: f64 = 190.0;
const PLOT_TOP: f64 = 10.0;
const PLOT_WIDTH: f64 = 690.0;
const ROW_HEIGHT: f64 = 54.0;
const CELL_GAP: f64 = 2.0;

struct Cell {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: String,
    text_x: f64,
    text_y: f64,
    label: String,
}

struct AxisLabel {
    x: f64,
    y: f64,
    rotate: Option<String>,
    label: String,
}

#[component]
pub fn Heatmap(spec: HeatmapSpec) -> Element {
    let cols = spec.col_labels.len();
    let rows = spec.row_labels.len();
    if cols == 0 || rows == 0 {
        return rsx! {
            figure { class: "chart",
                figcaption { class: "chart__title", "{spec.title}" }
                p { class: "chart__placeholder", "No states match the current filters." }
            }
        };
    }

    let cell_width = PLOT_WIDTH / cols as f64;
    let height = PLOT_TOP + rows as f64 * ROW_HEIGHT + 70.0;

    let mut cells = Vec::new();
    for (r, row_values) in spec.values.iter().enumerate() {
        for (c, value) in row_values.iter().enumerate() {
            let x = PLOT_LEFT + c as f64 * cell_width;
            let y = PLOT_TOP + r as f64 * ROW_HEIGHT;
            cells.push(Cell {
                x,
                y,
                width: cell_width - CELL_GAP,
                height: ROW_HEIGHT - CELL_GAP,
                color: ramp_color(normalize(*value, spec.domain)),
                text_x: x + (cell_width - CELL_GAP) / 2.0,
                text_y: y + ROW_HEIGHT / 2.0 + 4.0,
                label: format!("{value:.0}"),
            });
        }
    }

    let row_axis: Vec<AxisLabel> = spec
        .row_labels
        .iter()
        .enumerate()
        .map(|(r, label)| AxisLabel {
            x: PLOT_LEFT - 10.0,
            y: PLOT_TOP + (r as f64 + 0.5) * ROW_HEIGHT + 4.0,
            rotate: None,
            label: label.clone(),
        })
        .collect();

    let col_axis: Vec<AxisLabel> = spec
        .col_labels
        .iter()
        .enumerate()
        .map(|(c, label)| {
            let x = PLOT_LEFT + (c as f64 + 0.5) * cell_width;
            let y = PLOT_TOP + rows as f64 * ROW_HEIGHT + 14.0;
            AxisLabel {
                x,
                y,
                rotate: Some(format!("rotate(-45 {x} {y})")),
                label: label.clone(),
            }
        })
        .collect();

    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{spec.title}" }
            svg {
                class: "chart__canvas",
                view_box: "0 0 {WIDTH} {height}",
                preserve_aspect_ratio: "xMidYMid meet",

                for cell in cells.iter() {
                    rect {
                        x: "{cell.x}",
                        y: "{cell.y}",
                        width: "{cell.width}",
                        height: "{cell.height}",
                        rx: "3",
                        fill: "{cell.color}",
                    }
                    text {
                        x: "{cell.text_x}",
                        y: "{cell.text_y}",
                        text_anchor: "middle",
                        class: "chart__cell-value",
                        "{cell.label}"
                    }
                }

                for axis in row_axis.iter() {
                    text {
                        x: "{axis.x}",
                        y: "{axis.y}",
                        text_anchor: "end",
                        class: "chart__tick",
                        "{axis.label}"
                    }
                }

                for axis in col_axis.iter() {
                    if let Some(rotate) = axis.rotate.as_ref() {
                        text {
                            x: "{axis.x}",
                            y: "{axis.y}",
                            text_anchor: "end",
                            class: "chart__tick",
                            transform: "{rotate}",
                            "{axis.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Position of `value` inside the domain, clamped to [0, 1].
fn normalize(value: f64, domain: (f64, f64)) -> f64 {
    let (low, high) = domain;
    if high <= low {
        return 0.5;
    }
    ((value - low) / (high - low)).clamp(0.0, 1.0)
}

/// Two-segment red→yellow→green ramp over [0, 1].
fn ramp_color(t: f64) -> String {
    const RED: (u8, u8, u8) = (0xd7, 0x30, 0x27);
    const YELLOW: (u8, u8, u8) = (0xff, 0xff, 0xbf);
    const GREEN: (u8, u8, u8) = (0x1a, 0x98, 0x50);

    let (from, to, local) = if t < 0.5 {
        (RED, YELLOW, t * 2.0)
    } else {
        (YELLOW, GREEN, (t - 0.5) * 2.0)
    };

    let channel = |a: u8, b: u8| -> u8 {
        (a as f64 + (b as f64 - a as f64) * local).round() as u8
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_outside_the_domain() {
        assert_eq!(normalize(60.0, (70.0, 100.0)), 0.0);
        assert_eq!(normalize(110.0, (70.0, 100.0)), 1.0);
        assert_eq!(normalize(85.0, (70.0, 100.0)), 0.5);
    }

    #[test]
    fn ramp_endpoints_are_red_and_green() {
        assert_eq!(ramp_color(0.0), "#d73027");
        assert_eq!(ramp_color(1.0), "#1a9850");
        assert_eq!(ramp_color(0.5), "#ffffbf");
    }

    #[test]
    fn degenerate_domain_does_not_divide_by_zero() {
        assert_eq!(normalize(80.0, (90.0, 90.0)), 0.5);
    }
}
