//! Narrowing of the snapshot table by the dashboard's filter widgets.

use super::data::{QualityRating, StateSnapshotRow};

/// Rating filter choices offered by the dashboard select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    Only(QualityRating),
}

impl RatingFilter {
    pub const CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(QualityRating::LowConcern),
        Self::Only(QualityRating::MediumConcern),
        Self::Only(QualityRating::HighConcern),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(rating) => rating.label(),
        }
    }

    /// Inverse of `label`, for decoding a select value. Unknown strings come
    /// back as `None` so the caller can keep its current selection.
    pub fn parse(value: &str) -> Option<Self> {
        Self::CHOICES.into_iter().find(|c| c.label() == value)
    }
}

/// Apply the state multiselect and the rating filter to the snapshot rows.
///
/// An empty `selected_states` slice means "no state filter" and returns every
/// row — not "match nothing". Row order always follows the input table.
pub fn filter_snapshot(
    rows: &[StateSnapshotRow],
    selected_states: &[String],
    rating: RatingFilter,
) -> Vec<StateSnapshotRow> {
    rows.iter()
        .filter(|row| {
            selected_states.is_empty() || selected_states.iter().any(|s| s == &row.state)
        })
        .filter(|row| match rating {
            RatingFilter::All => true,
            RatingFilter::Only(wanted) => row.rating() == wanted,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sample_snapshot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows() -> Vec<StateSnapshotRow> {
        sample_snapshot(&mut StdRng::seed_from_u64(21))
    }

    #[test]
    fn empty_selection_and_all_ratings_is_identity() {
        let rows = rows();
        let filtered = filter_snapshot(&rows, &[], RatingFilter::All);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn state_selection_keeps_only_named_states_in_table_order() {
        let rows = rows();
        let picks = vec!["Georgia".to_string(), "Alaska".to_string()];
        let filtered = filter_snapshot(&rows, &picks, RatingFilter::All);
        let names: Vec<&str> = filtered.iter().map(|r| r.state.as_str()).collect();
        // Table order, not selection order.
        assert_eq!(names, vec!["Alaska", "Georgia"]);
    }

    #[test]
    fn single_state_filter_returns_exactly_that_row() {
        let rows = rows();
        let filtered = filter_snapshot(&rows, &["Alabama".to_string()], RatingFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].state, "Alabama");
    }

    #[test]
    fn rating_filter_matches_derived_rating_only() {
        let rows = rows();
        let filtered = filter_snapshot(
            &rows,
            &[],
            RatingFilter::Only(QualityRating::MediumConcern),
        );
        assert!(filtered.len() <= rows.len());
        for row in &filtered {
            assert_eq!(row.rating(), QualityRating::MediumConcern);
        }
    }

    #[test]
    fn unmatched_filters_yield_an_empty_table() {
        let rows = rows();
        let filtered = filter_snapshot(&rows, &["Wyoming".to_string()], RatingFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn rating_filter_parse_round_trips_labels() {
        for choice in RatingFilter::CHOICES {
            assert_eq!(RatingFilter::parse(choice.label()), Some(choice));
        }
        assert_eq!(RatingFilter::parse("Severe Concern"), None);
    }
}
