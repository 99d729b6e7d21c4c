//! Synthetic sample tables backing every page of the atlas.
//!
//! Nothing here touches a network or a file: the snapshot table and the
//! monthly trend series are drawn from whatever `Rng` the caller hands in.
//! Launchers pass `rand::thread_rng()` once at mount and park the result in
//! Dioxus context; tests pass a seeded `StdRng` to get reproducible tables.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// The fixed set of states covered by the demo dataset.
pub const STATES: [&str; 18] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
];

/// First month of the generated trend window (inclusive).
pub const TREND_START: (i32, Month) = (2023, Month::January);
/// Last month of the generated trend window (inclusive).
pub const TREND_END: (i32, Month) = (2024, Month::December);

/// Three-level concern category derived from the overall score.
///
/// Never stored on a row; always recomputed from the score so the two can't
/// drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityRating {
    LowConcern,
    MediumConcern,
    HighConcern,
}

impl QualityRating {
    /// Thresholds: ≥90 low concern, ≥80 medium concern, below that high.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::LowConcern
        } else if score >= 80 {
            Self::MediumConcern
        } else {
            Self::HighConcern
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LowConcern => "Low Concern",
            Self::MediumConcern => "Medium Concern",
            Self::HighConcern => "High Concern",
        }
    }

    /// Badge modifier class for the data table.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::LowConcern => "rating-badge rating-badge--low",
            Self::MediumConcern => "rating-badge rating-badge--medium",
            Self::HighConcern => "rating-badge rating-badge--high",
        }
    }
}

/// One row of the per-state snapshot table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshotRow {
    pub state: String,
    pub enrollment_completeness: u32,
    pub claims_accuracy: u32,
    pub provider_quality: u32,
    pub demographic_quality: u32,
    pub overall_score: u32,
}

impl StateSnapshotRow {
    pub fn rating(&self) -> QualityRating {
        QualityRating::from_score(self.overall_score)
    }
}

/// Columns of the snapshot table, used by selectors and chart builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMetric {
    EnrollmentCompleteness,
    ClaimsAccuracy,
    ProviderQuality,
    DemographicQuality,
    OverallScore,
}

impl SnapshotMetric {
    /// The four sub-scores, in table order (no overall).
    pub const SUB_SCORES: [Self; 4] = [
        Self::EnrollmentCompleteness,
        Self::ClaimsAccuracy,
        Self::ProviderQuality,
        Self::DemographicQuality,
    ];

    /// The three headline metrics charted on the dashboard bar chart.
    pub const HEADLINE: [Self; 3] = [
        Self::EnrollmentCompleteness,
        Self::ClaimsAccuracy,
        Self::ProviderQuality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::EnrollmentCompleteness => "Enrollment Completeness",
            Self::ClaimsAccuracy => "Claims Accuracy",
            Self::ProviderQuality => "Provider Data Quality",
            Self::DemographicQuality => "Demographic Data Quality",
            Self::OverallScore => "Overall Score",
        }
    }

    pub fn value(self, row: &StateSnapshotRow) -> u32 {
        match self {
            Self::EnrollmentCompleteness => row.enrollment_completeness,
            Self::ClaimsAccuracy => row.claims_accuracy,
            Self::ProviderQuality => row.provider_quality,
            Self::DemographicQuality => row.demographic_quality,
            Self::OverallScore => row.overall_score,
        }
    }
}

/// One month of the aggregate trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// First day of the month the point describes.
    pub month: Date,
    pub enrollment: f64,
    pub claims: f64,
    pub provider: f64,
}

/// Series of the trend table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendMetric {
    Enrollment,
    Claims,
    Provider,
}

impl TrendMetric {
    pub const ALL: [Self; 3] = [Self::Enrollment, Self::Claims, Self::Provider];

    pub fn label(self) -> &'static str {
        match self {
            Self::Enrollment => "Enrollment",
            Self::Claims => "Claims",
            Self::Provider => "Provider",
        }
    }

    pub fn value(self, point: &TrendPoint) -> f64 {
        match self {
            Self::Enrollment => point.enrollment,
            Self::Claims => point.claims,
            Self::Provider => point.provider,
        }
    }
}

/// Both generated tables, created once per process and shared via context.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasData {
    pub snapshot: Vec<StateSnapshotRow>,
    pub trends: Vec<TrendPoint>,
}

impl AtlasData {
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            snapshot: sample_snapshot(rng),
            trends: sample_trends(rng),
        }
    }
}

/// Draw the per-state snapshot table. Bounds are half-open per field.
pub fn sample_snapshot(rng: &mut impl Rng) -> Vec<StateSnapshotRow> {
    STATES
        .iter()
        .map(|state| StateSnapshotRow {
            state: (*state).to_string(),
            enrollment_completeness: rng.gen_range(75..98),
            claims_accuracy: rng.gen_range(70..95),
            provider_quality: rng.gen_range(80..99),
            demographic_quality: rng.gen_range(85..100),
            overall_score: rng.gen_range(75..95),
        })
        .collect()
}

/// Draw the monthly trend series for the fixed window.
///
/// Each series is an integer baseline plus a sine perturbation keyed by the
/// point's sequence index, so the lines look smooth without modeling anything.
pub fn sample_trends(rng: &mut impl Rng) -> Vec<TrendPoint> {
    let first = month_start(TREND_START.0, TREND_START.1);
    let last = month_start(TREND_END.0, TREND_END.1);

    let mut points = Vec::new();
    let mut current = first;
    let mut index = 0usize;
    while current <= last {
        let wave = (index as f64).sin();
        points.push(TrendPoint {
            month: current,
            enrollment: rng.gen_range(85..95) as f64 + wave * 2.0,
            claims: rng.gen_range(80..92) as f64 + wave * 3.0,
            provider: rng.gen_range(88..97) as f64 + wave * 2.0,
        });
        current = next_month(current);
        index += 1;
    }
    points
}

fn month_start(year: i32, month: Month) -> Date {
    Date::from_calendar_date(year, month, 1).expect("day 1 is valid for every month")
}

fn next_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        other => (date.year(), other.next()),
    };
    month_start(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snapshot_scores_stay_inside_field_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for row in sample_snapshot(&mut rng) {
            assert!((75..98).contains(&row.enrollment_completeness), "{row:?}");
            assert!((70..95).contains(&row.claims_accuracy), "{row:?}");
            assert!((80..99).contains(&row.provider_quality), "{row:?}");
            assert!((85..100).contains(&row.demographic_quality), "{row:?}");
            assert!((75..95).contains(&row.overall_score), "{row:?}");
        }
    }

    #[test]
    fn snapshot_covers_every_state_once_in_order() {
        let mut rng = StdRng::seed_from_u64(12);
        let rows = sample_snapshot(&mut rng);
        let names: Vec<&str> = rows.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(names, STATES.to_vec());
    }

    #[test]
    fn rating_tracks_documented_thresholds() {
        assert_eq!(QualityRating::from_score(94), QualityRating::LowConcern);
        assert_eq!(QualityRating::from_score(90), QualityRating::LowConcern);
        assert_eq!(QualityRating::from_score(89), QualityRating::MediumConcern);
        assert_eq!(QualityRating::from_score(80), QualityRating::MediumConcern);
        assert_eq!(QualityRating::from_score(79), QualityRating::HighConcern);

        let mut rng = StdRng::seed_from_u64(13);
        for row in sample_snapshot(&mut rng) {
            assert_eq!(row.rating(), QualityRating::from_score(row.overall_score));
        }
    }

    #[test]
    fn trend_window_is_24_ascending_months() {
        let mut rng = StdRng::seed_from_u64(14);
        let points = sample_trends(&mut rng);
        assert_eq!(points.len(), 24);
        assert_eq!(points[0].month, month_start(2023, Month::January));
        assert_eq!(points[23].month, month_start(2024, Month::December));
        for pair in points.windows(2) {
            assert!(pair[0].month < pair[1].month);
        }
    }

    #[test]
    fn trend_values_stay_inside_baseline_plus_wave() {
        let mut rng = StdRng::seed_from_u64(15);
        for point in sample_trends(&mut rng) {
            // baseline bounds widened by the wave amplitude
            assert!((83.0..97.0).contains(&point.enrollment), "{point:?}");
            assert!((77.0..95.0).contains(&point.claims), "{point:?}");
            assert!((86.0..99.0).contains(&point.provider), "{point:?}");
        }
    }

    #[test]
    fn same_seed_reproduces_identical_tables() {
        let first = AtlasData::sample(&mut StdRng::seed_from_u64(7));
        let second = AtlasData::sample(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }
}
