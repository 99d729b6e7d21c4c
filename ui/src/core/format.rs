//! Formatting helpers for presenting metrics.

use time::macros::format_description;
use time::Date;

/// One-decimal percentage, or "N/A" when there was nothing to aggregate.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "N/A".to_string(),
    }
}

pub fn format_score(value: u32) -> String {
    format!("{value}%")
}

/// Signed one-decimal percentage, e.g. "+1.7%" / "-3.0%".
pub fn format_signed_percent(value: f64) -> String {
    format!("{value:+.1}%")
}

pub fn format_signed_points(value: i64) -> String {
    format!("{value:+}")
}

/// "Jan 2023" style month badge for trend axes.
pub fn format_month(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [year]"))
        .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month};

    #[test]
    fn empty_aggregates_render_as_na_not_nan() {
        assert_eq!(format_percent(None), "N/A");
        assert_eq!(format_percent(Some(88.25)), "88.2%");
    }

    #[test]
    fn signed_formats_keep_their_sign() {
        assert_eq!(format_signed_percent(1.7), "+1.7%");
        assert_eq!(format_signed_percent(-3.0), "-3.0%");
        assert_eq!(format_signed_points(0), "+0");
        assert_eq!(format_signed_points(-4), "-4");
    }

    #[test]
    fn month_badge_is_short_month_plus_year() {
        let date = Date::from_calendar_date(2023, Month::January, 1).unwrap();
        assert_eq!(format_month(date), "Jan 2023");
    }
}
