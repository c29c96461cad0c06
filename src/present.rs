//! Terminal presentation of the temperature report
//!
//! Temperatures are printed with one decimal place, padded to a common width
//! and coloured by [`TemperatureBand`].

use crate::models::{DaySummary, HourlyForecast, Location};
use crossterm::style::{Color, Stylize};
use tracing::debug;

/// Fixed temperature ranges, coldest first. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemperatureBand {
    /// ≤ -10 °C
    Frigid,
    /// ≤ 5 °C
    Cold,
    /// ≤ 10 °C
    Cool,
    /// ≤ 15 °C
    Mild,
    /// ≤ 20 °C
    Pleasant,
    /// ≤ 25 °C
    Warm,
    /// ≤ 30 °C
    Hot,
    /// > 30 °C, and anything that fails every bound (NaN)
    Scorching,
}

impl TemperatureBand {
    pub const ALL: [TemperatureBand; 8] = [
        Self::Frigid,
        Self::Cold,
        Self::Cool,
        Self::Mild,
        Self::Pleasant,
        Self::Warm,
        Self::Hot,
        Self::Scorching,
    ];

    /// Band containing `celsius`
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| band.upper_bound().is_some_and(|bound| celsius <= bound))
            .unwrap_or(Self::Scorching)
    }

    /// Inclusive upper bound in °C, `None` for the open-ended warmest band
    #[must_use]
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Frigid => Some(-10.0),
            Self::Cold => Some(5.0),
            Self::Cool => Some(10.0),
            Self::Mild => Some(15.0),
            Self::Pleasant => Some(20.0),
            Self::Warm => Some(25.0),
            Self::Hot => Some(30.0),
            Self::Scorching => None,
        }
    }

    /// Display colour for the band
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Frigid => Color::DarkBlue,
            Self::Cold => Color::Blue,
            Self::Cool => Color::Cyan,
            Self::Mild => Color::Green,
            Self::Pleasant => Color::Yellow,
            Self::Warm => Color::Red,
            Self::Hot => Color::DarkRed,
            Self::Scorching => Color::Grey,
        }
    }
}

/// Format a temperature as e.g. ` 7.3°C`, `-12.0°C` or `23.5°C`.
///
/// Rounds half away from zero. Values strictly between -10 and 10 get one
/// leading space so that columns line up.
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    let rounded = (celsius * 10.0).round() / 10.0;
    if celsius > -10.0 && celsius < 10.0 {
        format!(" {rounded:.1}°C")
    } else {
        format!("{rounded:.1}°C")
    }
}

/// Renders the report text
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    colored: bool,
}

impl Presenter {
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Formatted temperature, coloured by band when colour is enabled
    #[must_use]
    pub fn temperature(&self, celsius: f64) -> String {
        let text = format_temperature(celsius);
        if self.colored {
            text.with(TemperatureBand::from_celsius(celsius).color())
                .to_string()
        } else {
            text
        }
    }

    /// `<Country> / <City>: <temp>` for the sample at index `hour`.
    ///
    /// The series is assumed to start at local midnight of today. Returns
    /// `None` when the series is too short to contain that hour.
    #[must_use]
    pub fn current_line(
        &self,
        location: &Location,
        forecast: &HourlyForecast,
        hour: usize,
    ) -> Option<String> {
        let Some(current) = forecast.temperature_at(hour) else {
            debug!(
                "Skipping current temperature: hour {} is outside {} samples",
                hour,
                forecast.len()
            );
            return None;
        };
        Some(format!(
            "{}: {}",
            location.display_name(),
            self.temperature(current)
        ))
    }

    /// One `<min> - <max> : <label>` line per day, oldest first
    #[must_use]
    pub fn daily_lines(&self, summaries: &[DaySummary]) -> Vec<String> {
        let mut ordered = summaries.to_vec();
        ordered.sort_by_key(|summary| summary.date);
        ordered
            .iter()
            .map(|summary| {
                format!(
                    "{} - {} : {}",
                    self.temperature(summary.min_temp),
                    self.temperature(summary.max_temp),
                    summary.label()
                )
            })
            .collect()
    }

    /// Full report: optional current line, a blank line, then the daily table
    #[must_use]
    pub fn render(
        &self,
        location: &Location,
        forecast: &HourlyForecast,
        summaries: &[DaySummary],
        hour: usize,
    ) -> String {
        let mut out = String::new();
        if let Some(current) = self.current_line(location, forecast, hour) {
            out.push_str(&current);
            out.push_str("\n\n");
        }
        for line in self.daily_lines(summaries) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_daily;
    use rstest::rstest;

    fn forecast(times: &[&str], temperatures: &[f64]) -> HourlyForecast {
        HourlyForecast::new(
            times.iter().map(|t| (*t).to_string()).collect(),
            temperatures.to_vec(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(-40.0, TemperatureBand::Frigid)]
    #[case(-10.0, TemperatureBand::Frigid)]
    #[case(-9.99, TemperatureBand::Cold)]
    #[case(5.0, TemperatureBand::Cold)]
    #[case(5.01, TemperatureBand::Cool)]
    #[case(10.0, TemperatureBand::Cool)]
    #[case(15.0, TemperatureBand::Mild)]
    #[case(20.0, TemperatureBand::Pleasant)]
    #[case(25.0, TemperatureBand::Warm)]
    #[case(30.0, TemperatureBand::Hot)]
    #[case(30.1, TemperatureBand::Scorching)]
    #[case(f64::INFINITY, TemperatureBand::Scorching)]
    #[case(f64::NEG_INFINITY, TemperatureBand::Frigid)]
    #[case(f64::NAN, TemperatureBand::Scorching)]
    fn test_band_boundaries(#[case] celsius: f64, #[case] expected: TemperatureBand) {
        assert_eq!(TemperatureBand::from_celsius(celsius), expected);
    }

    #[test]
    fn test_bands_are_monotonic() {
        let mut previous = TemperatureBand::from_celsius(-60.0);
        let mut celsius = -60.0;
        while celsius <= 60.0 {
            let band = TemperatureBand::from_celsius(celsius);
            assert!(band >= previous, "{celsius} moved from {previous:?} to {band:?}");
            previous = band;
            celsius += 0.05;
        }
        assert_eq!(previous, TemperatureBand::Scorching);
    }

    #[test]
    fn test_band_colors_are_distinct() {
        let colors: Vec<Color> = TemperatureBand::ALL.iter().map(|b| b.color()).collect();
        for (i, color) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(color));
        }
        assert_eq!(TemperatureBand::Frigid.color(), Color::DarkBlue);
        assert_eq!(TemperatureBand::Scorching.color(), Color::Grey);
    }

    #[rstest]
    #[case(7.25, " 7.3°C")]
    #[case(0.0, " 0.0°C")]
    #[case(-3.14, " -3.1°C")]
    #[case(-10.0, "-10.0°C")]
    #[case(10.0, "10.0°C")]
    #[case(23.46, "23.5°C")]
    #[case(-12.36, "-12.4°C")]
    fn test_format_temperature(#[case] celsius: f64, #[case] expected: &str) {
        assert_eq!(format_temperature(celsius), expected);
    }

    #[test]
    fn test_colored_temperature_wraps_plain_text() {
        let plain = Presenter::new(false).temperature(7.25);
        assert_eq!(plain, " 7.3°C");
        let colored = Presenter::new(true).temperature(7.25);
        assert!(colored.contains(" 7.3°C"));
    }

    #[test]
    fn test_current_line_uses_hour_index() {
        let location = Location::new(52.52, 13.405, "Berlin", "Germany");
        let hourly = forecast(
            &["2024-01-01T00:00", "2024-01-01T01:00", "2024-01-01T02:00"],
            &[1.0, 2.0, 12.5],
        );
        let line = Presenter::new(false).current_line(&location, &hourly, 2);
        assert_eq!(line.as_deref(), Some("Germany / Berlin: 12.5°C"));
    }

    #[test]
    fn test_current_line_skipped_past_end() {
        let location = Location::new(52.52, 13.405, "Berlin", "Germany");
        let hourly = forecast(&["2024-01-01T00:00"], &[1.0]);
        assert!(Presenter::new(false).current_line(&location, &hourly, 5).is_none());
    }

    #[test]
    fn test_render_full_report() {
        let location = Location::new(0.0, 0.0, "Oslo", "Norway");
        let hourly = forecast(
            &["2024-01-01T00:00", "2024-01-01T12:00", "2024-01-02T06:00"],
            &[-5.0, 3.2, 11.0],
        );
        let days = aggregate_daily(&hourly).unwrap();
        let report = Presenter::new(false).render(&location, &hourly, &days, 1);
        assert_eq!(
            report,
            concat!(
                "Norway / Oslo:  3.2°C\n",
                "\n",
                " -5.0°C -  3.2°C : (Mon) Jan 01, 2024\n",
                "11.0°C - 11.0°C : (Tue) Jan 02, 2024\n",
            )
        );
    }

    #[test]
    fn test_render_without_current_hour_keeps_daily_table() {
        let location = Location::new(0.0, 0.0, "Oslo", "Norway");
        let hourly = forecast(
            &["2024-01-01T00:00", "2024-01-01T12:00", "2024-01-02T06:00"],
            &[-5.0, 3.2, 11.0],
        );
        let days = aggregate_daily(&hourly).unwrap();
        let report = Presenter::new(false).render(&location, &hourly, &days, 23);
        assert_eq!(
            report,
            concat!(
                " -5.0°C -  3.2°C : (Mon) Jan 01, 2024\n",
                "11.0°C - 11.0°C : (Tue) Jan 02, 2024\n",
            )
        );
    }

    #[test]
    fn test_daily_lines_sorted_regardless_of_input_order() {
        let hourly = forecast(
            &["2024-01-03T00:00", "2023-12-31T00:00", "2024-01-01T00:00"],
            &[1.0, 2.0, 3.0],
        );
        let mut days = aggregate_daily(&hourly).unwrap();
        days.reverse();
        let lines = Presenter::new(false).daily_lines(&days);
        assert!(lines[0].ends_with("(Sun) Dec 31, 2023"));
        assert!(lines[1].ends_with("(Mon) Jan 01, 2024"));
        assert!(lines[2].ends_with("(Wed) Jan 03, 2024"));
    }
}
