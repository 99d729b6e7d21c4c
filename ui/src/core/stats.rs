//! Aggregates computed by the view renderers.
//!
//! The two interesting edges both live here: the mean of an empty filter
//! result is `None` (displayed as "N/A", never a NaN in the DOM), and the
//! trailing trend delta refuses to index a series shorter than its window.

use thiserror::Error;

use super::data::{SnapshotMetric, StateSnapshotRow, TrendMetric, TrendPoint};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("insufficient history: need at least {needed} points, have {have}")]
    InsufficientHistory { needed: usize, have: usize },
}

/// Arithmetic mean; `None` when there is nothing to average.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().copied().sum::<f64>() / values.len() as f64)
    }
}

/// Mean of one snapshot column over the (possibly filtered, possibly empty)
/// rows.
pub fn metric_mean(rows: &[StateSnapshotRow], metric: SnapshotMetric) -> Option<f64> {
    let values: Vec<f64> = rows.iter().map(|row| metric.value(row) as f64).collect();
    mean(&values)
}

/// Signed per-metric difference for the comparison page: `left − right`.
pub fn metric_difference(
    left: &StateSnapshotRow,
    right: &StateSnapshotRow,
    metric: SnapshotMetric,
) -> i64 {
    metric.value(left) as i64 - metric.value(right) as i64
}

/// `series[last] − series[last − window]`.
///
/// Needs `window + 1` points; the fixed 24-month generation window always
/// satisfies that, but anyone shrinking the window hits the error instead of
/// an out-of-bounds index.
pub fn trailing_delta(values: &[f64], window: usize) -> Result<f64, StatsError> {
    let needed = window + 1;
    if values.len() < needed {
        return Err(StatsError::InsufficientHistory {
            needed,
            have: values.len(),
        });
    }
    let last = values[values.len() - 1];
    let earlier = values[values.len() - 1 - window];
    Ok(last - earlier)
}

/// Latest value and six-month trailing delta for one trend series.
pub fn latest_with_six_month_delta(
    points: &[TrendPoint],
    metric: TrendMetric,
) -> (Option<f64>, Result<f64, StatsError>) {
    let values: Vec<f64> = points.iter().map(|p| metric.value(p)).collect();
    let latest = values.last().copied();
    let delta = trailing_delta(&values, 6);
    (latest, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{sample_trends, StateSnapshotRow};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn row(state: &str, scores: [u32; 5]) -> StateSnapshotRow {
        StateSnapshotRow {
            state: state.to_string(),
            enrollment_completeness: scores[0],
            claims_accuracy: scores[1],
            provider_quality: scores[2],
            demographic_quality: scores[3],
            overall_score: scores[4],
        }
    }

    #[test]
    fn mean_of_empty_set_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(metric_mean(&[], SnapshotMetric::OverallScore), None);
    }

    #[test]
    fn metric_mean_averages_the_selected_column() {
        let rows = vec![
            row("Alabama", [80, 70, 90, 90, 80]),
            row("Alaska", [90, 80, 90, 90, 90]),
        ];
        assert_eq!(
            metric_mean(&rows, SnapshotMetric::EnrollmentCompleteness),
            Some(85.0)
        );
        assert_eq!(metric_mean(&rows, SnapshotMetric::ClaimsAccuracy), Some(75.0));
    }

    #[test]
    fn difference_is_exact_and_signed() {
        let left = row("Texas", [88, 74, 91, 95, 82]);
        let right = row("Iowa", [90, 70, 91, 85, 94]);
        assert_eq!(
            metric_difference(&left, &right, SnapshotMetric::EnrollmentCompleteness),
            -2
        );
        assert_eq!(
            metric_difference(&left, &right, SnapshotMetric::ClaimsAccuracy),
            4
        );
        assert_eq!(
            metric_difference(&left, &right, SnapshotMetric::ProviderQuality),
            0
        );
        assert_eq!(
            metric_difference(&left, &right, SnapshotMetric::OverallScore),
            -12
        );
    }

    #[test]
    fn degenerate_comparison_with_itself_is_all_zeros() {
        let state = row("Texas", [88, 74, 91, 95, 82]);
        for metric in SnapshotMetric::SUB_SCORES {
            assert_eq!(metric_difference(&state, &state, metric), 0);
        }
        assert_eq!(
            metric_difference(&state, &state, SnapshotMetric::OverallScore),
            0
        );
    }

    #[test]
    fn trailing_delta_reaches_exactly_window_points_back() {
        let values = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
        assert_eq!(trailing_delta(&values, 6), Ok(63.0));
        assert_eq!(trailing_delta(&values, 1), Ok(32.0));
    }

    #[test]
    fn trailing_delta_refuses_short_series() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(
            trailing_delta(&values, 6),
            Err(StatsError::InsufficientHistory { needed: 7, have: 3 })
        );
        assert_eq!(
            trailing_delta(&[], 6),
            Err(StatsError::InsufficientHistory { needed: 7, have: 0 })
        );
    }

    #[test]
    fn six_month_delta_matches_generated_series() {
        let points = sample_trends(&mut StdRng::seed_from_u64(31));
        let (latest, delta) = latest_with_six_month_delta(&points, TrendMetric::Claims);
        let n = points.len();
        assert_eq!(latest, Some(points[n - 1].claims));
        assert_eq!(delta, Ok(points[n - 1].claims - points[n - 7].claims));
    }
}
