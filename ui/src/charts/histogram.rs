//! Score distribution histogram.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub title: String,
    pub values: Vec<f64>,
    pub bins: usize,
    pub color: &'static str,
    pub x_label: String,
}

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 360.0;
const PLOT_LEFT: f64 = 52.0;
const PLOT_TOP: f64 = 16.0;
const PLOT_WIDTH: f64 = 830.0;
const PLOT_HEIGHT: f64 = 280.0;
const PLOT_RIGHT: f64 = PLOT_LEFT + PLOT_WIDTH;
const BASELINE: f64 = PLOT_TOP + PLOT_HEIGHT;

struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

struct Tick {
    x: f64,
    label: String,
}

#[component]
pub fn Histogram(spec: HistogramSpec) -> Element {
    let Some(binned) = bin_counts(&spec.values, spec.bins) else {
        return rsx! {
            figure { class: "chart",
                figcaption { class: "chart__title", "{spec.title}" }
                p { class: "chart__placeholder", "No states match the current filters." }
            }
        };
    };

    let max_count = binned.counts.iter().copied().max().unwrap_or(1).max(1);
    let bar_width = PLOT_WIDTH / binned.counts.len() as f64;

    let bars: Vec<Bar> = binned
        .counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            let height = *count as f64 / max_count as f64 * PLOT_HEIGHT;
            Bar {
                x: PLOT_LEFT + i as f64 * bar_width,
                y: BASELINE - height,
                width: (bar_width - 1.0).max(1.0),
                height,
            }
        })
        .collect();

    // Edge ticks plus the midpoint keep the axis readable at any bin count.
    let ticks: Vec<Tick> = [0.0, 0.5, 1.0]
        .into_iter()
        .map(|f| Tick {
            x: PLOT_LEFT + f * PLOT_WIDTH,
            label: format!("{:.0}", binned.min + f * (binned.max - binned.min)),
        })
        .collect();

    let tick_y = BASELINE + 18.0;
    let count_label_y = PLOT_TOP + 10.0;

    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{spec.title}" }
            svg {
                class: "chart__canvas",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                line {
                    x1: "{PLOT_LEFT}",
                    y1: "{BASELINE}",
                    x2: "{PLOT_RIGHT}",
                    y2: "{BASELINE}",
                    stroke: "#c8cfd9",
                    stroke_width: "1",
                }

                for bar in bars.iter() {
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: spec.color,
                    }
                }

                for tick in ticks.iter() {
                    text {
                        x: "{tick.x}",
                        y: "{tick_y}",
                        text_anchor: "middle",
                        class: "chart__tick",
                        "{tick.label}"
                    }
                }

                text {
                    x: "{PLOT_LEFT}",
                    y: "{count_label_y}",
                    class: "chart__tick",
                    "Peak bin: {max_count} states"
                }
            }
            p { class: "chart__axis-label", "{spec.x_label}" }
        }
    }
}

pub(crate) struct Binned {
    pub counts: Vec<usize>,
    pub min: f64,
    pub max: f64,
}

/// Partition `values` into `bins` equal-width buckets over their min..max
/// range. The maximum lands in the last bucket; a constant series collapses
/// into bucket zero. `None` when there is nothing to bin.
pub(crate) fn bin_counts(values: &[f64], bins: usize) -> Option<Binned> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut counts = vec![0usize; bins];
    for value in values {
        let index = if span == 0.0 {
            0
        } else {
            (((value - min) / span * bins as f64) as usize).min(bins - 1)
        };
        counts[index] += 1;
    }

    Some(Binned { counts, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_lands_in_exactly_one_bin() {
        let values: Vec<f64> = (75..95).map(|v| v as f64).collect();
        let binned = bin_counts(&values, 20).unwrap();
        assert_eq!(binned.counts.len(), 20);
        assert_eq!(binned.counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn maximum_value_falls_in_the_last_bin() {
        let binned = bin_counts(&[75.0, 80.0, 94.0], 20).unwrap();
        assert_eq!(*binned.counts.last().unwrap(), 1);
        assert_eq!(binned.min, 75.0);
        assert_eq!(binned.max, 94.0);
    }

    #[test]
    fn constant_series_collapses_into_bin_zero() {
        let binned = bin_counts(&[88.0, 88.0, 88.0], 20).unwrap();
        assert_eq!(binned.counts[0], 3);
        assert_eq!(binned.counts[1..].iter().sum::<usize>(), 0);
    }

    #[test]
    fn empty_input_has_no_bins() {
        assert!(bin_counts(&[], 20).is_none());
        assert!(bin_counts(&[1.0], 0).is_none());
    }
}
