//! Two-series radar (polar) comparison chart.

use dioxus::prelude::*;

use super::legend;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub name: String,
    pub color: &'static str,
    /// One value per category, same order as `RadarSpec::categories`.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSpec {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<RadarSeries>,
    /// Radial axis maximum; scores use 100.
    pub max_value: f64,
}

const SIZE: f64 = 460.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 160.0;

struct SeriesShape {
    points: String,
    color: &'static str,
}

struct CategoryLabel {
    x: f64,
    y: f64,
    anchor: &'static str,
    label: String,
}

#[component]
pub fn RadarChart(spec: RadarSpec) -> Element {
    let legend_entries: Vec<(String, &'static str)> = spec
        .series
        .iter()
        .map(|s| (s.name.clone(), s.color))
        .collect();

    // Concentric guide rings at quarter steps.
    let rings: Vec<String> = [0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|f| {
            let radii = vec![spec.max_value * f; spec.categories.len()];
            polygon_points(&radii, spec.max_value, CENTER, CENTER, RADIUS)
        })
        .collect();

    let shapes: Vec<SeriesShape> = spec
        .series
        .iter()
        .map(|series| SeriesShape {
            points: polygon_points(&series.values, spec.max_value, CENTER, CENTER, RADIUS),
            color: series.color,
        })
        .collect();

    let labels: Vec<CategoryLabel> = spec
        .categories
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let (x, y) = vertex(i, spec.categories.len(), CENTER, CENTER, RADIUS + 18.0, 1.0);
            let anchor = if (x - CENTER).abs() < 1.0 {
                "middle"
            } else if x < CENTER {
                "end"
            } else {
                "start"
            };
            CategoryLabel {
                x,
                y,
                anchor,
                label: label.clone(),
            }
        })
        .collect();

    rsx! {
        figure { class: "chart chart--radar",
            figcaption { class: "chart__title", "{spec.title}" }
            {legend(&legend_entries)}
            svg {
                class: "chart__canvas",
                view_box: "0 0 {SIZE} {SIZE}",
                preserve_aspect_ratio: "xMidYMid meet",

                for ring in rings.iter() {
                    polygon {
                        points: "{ring}",
                        fill: "none",
                        stroke: "#dde3eb",
                        stroke_width: "1",
                    }
                }

                for shape in shapes.iter() {
                    polygon {
                        points: "{shape.points}",
                        fill: "{shape.color}",
                        fill_opacity: "0.25",
                        stroke: "{shape.color}",
                        stroke_width: "2",
                    }
                }

                for label in labels.iter() {
                    text {
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: label.anchor,
                        class: "chart__tick",
                        "{label.label}"
                    }
                }
            }
        }
    }
}

/// Vertex `i` of `n` around the center, value scaled by `fraction` of max.
/// The first category points straight up; the rest follow clockwise.
fn vertex(i: usize, n: usize, cx: f64, cy: f64, radius: f64, fraction: f64) -> (f64, f64) {
    let angle = std::f64::consts::TAU * i as f64 / n.max(1) as f64 - std::f64::consts::FRAC_PI_2;
    (
        cx + radius * fraction * angle.cos(),
        cy + radius * fraction * angle.sin(),
    )
}

/// SVG polygon point list for one series, filled to the center.
fn polygon_points(values: &[f64], max_value: f64, cx: f64, cy: f64, radius: f64) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let fraction = if max_value > 0.0 {
                (value / max_value).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (x, y) = vertex(i, n, cx, cy, radius, fraction);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_vertex_points_straight_up() {
        let (x, y) = vertex(0, 4, 100.0, 100.0, 50.0, 1.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn polygon_has_one_point_per_category() {
        let points = polygon_points(&[100.0, 50.0, 75.0, 25.0], 100.0, 100.0, 100.0, 50.0);
        assert_eq!(points.split(' ').count(), 4);
    }

    #[test]
    fn zero_values_collapse_to_the_center() {
        let points = polygon_points(&[0.0, 0.0, 0.0], 100.0, 100.0, 100.0, 50.0);
        for pair in points.split(' ') {
            assert_eq!(pair, "100.0,100.0");
        }
    }

    #[test]
    fn values_above_max_clamp_to_the_rim() {
        let clamped = polygon_points(&[150.0], 100.0, 100.0, 100.0, 50.0);
        let rim = polygon_points(&[100.0], 100.0, 100.0, 100.0, 50.0);
        assert_eq!(clamped, rim);
    }
}
