//! Per-day temperature summary

use crate::ReportError;
use chrono::NaiveDate;

/// Layout of a day label, e.g. `(Mon) Jan 01, 2024`
pub const DAY_LABEL_LAYOUT: &str = "(%a) %b %d, %Y";

/// Render a calendar date as a day label
#[must_use]
pub fn format_day_label(date: NaiveDate) -> String {
    date.format(DAY_LABEL_LAYOUT).to_string()
}

/// Parse a day label back into its calendar date
pub fn parse_day_label(label: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(label, DAY_LABEL_LAYOUT)
        .map_err(|e| ReportError::time_parse(label, e))
}

/// Minimum and maximum temperature of one calendar date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl DaySummary {
    /// Summarise one day's temperatures with a single linear scan.
    ///
    /// Returns `None` for an empty group.
    #[must_use]
    pub fn from_temperatures(date: NaiveDate, temperatures: &[f64]) -> Option<Self> {
        let (first, rest) = temperatures.split_first()?;
        let mut min_temp = *first;
        let mut max_temp = *first;
        for &temp in rest {
            if temp < min_temp {
                min_temp = temp;
            }
            if temp > max_temp {
                max_temp = temp;
            }
        }
        Some(Self {
            date,
            min_temp,
            max_temp,
        })
    }

    /// Display label, e.g. `(Tue) Jan 02, 2024`
    #[must_use]
    pub fn label(&self) -> String {
        format_day_label(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label_format() {
        assert_eq!(format_day_label(date(2024, 1, 1)), "(Mon) Jan 01, 2024");
        assert_eq!(format_day_label(date(2024, 2, 29)), "(Thu) Feb 29, 2024");
    }

    #[rstest]
    #[case(date(2024, 1, 1))]
    #[case(date(2024, 2, 29))]
    #[case(date(1999, 12, 31))]
    #[case(date(2031, 7, 4))]
    fn test_label_round_trip(#[case] day: NaiveDate) {
        let label = format_day_label(day);
        let parsed = parse_day_label(&label).unwrap();
        assert_eq!(parsed, day);
        assert_eq!(format_day_label(parsed), label);
    }

    #[test]
    fn test_label_with_wrong_weekday_is_rejected() {
        assert!(parse_day_label("(Fri) Jan 01, 2024").is_err());
        assert!(parse_day_label("2024-01-01").is_err());
    }

    #[test]
    fn test_min_max_scan() {
        let temps = [3.0, -5.0, 3.2, 0.0];
        let summary = DaySummary::from_temperatures(date(2024, 1, 1), &temps).unwrap();
        assert_eq!(summary.min_temp, -5.0);
        assert_eq!(summary.max_temp, 3.2);
        assert_eq!(summary.label(), "(Mon) Jan 01, 2024");
    }

    #[test]
    fn test_single_sample_day() {
        let summary = DaySummary::from_temperatures(date(2024, 1, 2), &[11.0]).unwrap();
        assert_eq!(summary.min_temp, 11.0);
        assert_eq!(summary.max_temp, 11.0);
    }

    #[test]
    fn test_empty_group_has_no_summary() {
        assert!(DaySummary::from_temperatures(date(2024, 1, 1), &[]).is_none());
    }
}
