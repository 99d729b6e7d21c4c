//! Declarative chart specs and the SVG components that draw them.
//!
//! Views never touch SVG directly: they build a plain spec struct (series,
//! labels, colors, dimensions) and hand it to one of the chart components
//! here. All geometry is computed in pure helpers so the math is testable
//! without a DOM.

use dioxus::prelude::*;

mod bar;
mod heatmap;
mod histogram;
mod line;
mod radar;

pub use bar::{BarChartSpec, BarSeries, GroupedBarChart};
pub use heatmap::{Heatmap, HeatmapSpec};
pub use histogram::{Histogram, HistogramSpec};
pub use line::{LineChart, LineChartSpec, LineSeries};
pub use radar::{RadarChart, RadarSeries, RadarSpec};

/// Default series color sequence: navy, cyan, green.
pub const SERIES_COLORS: [&str; 3] = ["#003D7A", "#00A6D6", "#82C341"];

/// Shared swatch legend rendered under a chart title.
pub(crate) fn legend(entries: &[(String, &'static str)]) -> Element {
    rsx! {
        div { class: "chart__legend",
            for (name, color) in entries.iter() {
                span { class: "chart__legend-item",
                    span {
                        class: "chart__legend-swatch",
                        style: "background: {color};",
                    }
                    "{name}"
                }
            }
        }
    }
}

/// Indices whose x labels are drawn; long axes keep roughly eight ticks.
pub(crate) fn label_stride(count: usize) -> usize {
    if count <= 8 {
        1
    } else {
        count.div_ceil(8)
    }
}

#[cfg(test)]
mod tests {
    use super::label_stride;

    #[test]
    fn short_axes_label_every_tick() {
        assert_eq!(label_stride(5), 1);
        assert_eq!(label_stride(8), 1);
    }

    #[test]
    fn long_axes_thin_out_to_about_eight_ticks() {
        assert_eq!(label_stride(24), 3);
        assert_eq!(label_stride(18), 3);
        assert!(100usize.div_ceil(label_stride(100)) <= 9);
    }
}
