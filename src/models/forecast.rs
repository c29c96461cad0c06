//! Hourly forecast model

use crate::ReportError;
use chrono::NaiveDateTime;

/// Layout of the provider's local timestamps, e.g. `2024-01-01T13:00`
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M";

/// One hour of the forecast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlySample {
    /// Naive local time in the forecast's own timezone
    pub timestamp: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
}

impl HourlySample {
    /// Parse a provider timestamp and pair it with its temperature
    pub fn parse(timestamp: &str, temperature_celsius: f64) -> Result<Self, ReportError> {
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_LAYOUT)
            .map_err(|e| ReportError::time_parse(timestamp, e))?;
        Ok(Self {
            timestamp,
            temperature_celsius,
        })
    }
}

/// Hourly temperature series as two index-aligned sequences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyForecast {
    /// Local timestamps, unparsed
    times: Vec<String>,
    /// Temperatures in Celsius, `temperatures[i]` belongs to `times[i]`
    temperatures: Vec<f64>,
}

impl HourlyForecast {
    /// Create a forecast, rejecting series of different lengths
    pub fn new(times: Vec<String>, temperatures: Vec<f64>) -> Result<Self, ReportError> {
        if times.len() != temperatures.len() {
            return Err(ReportError::decode(
                "forecast",
                format!(
                    "hourly series length mismatch: {} timestamps, {} temperatures",
                    times.len(),
                    temperatures.len()
                ),
            ));
        }
        Ok(Self {
            times,
            temperatures,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[String] {
        &self.times
    }

    #[must_use]
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Temperature at a raw array index, `None` past the end of the series
    #[must_use]
    pub fn temperature_at(&self, index: usize) -> Option<f64> {
        self.temperatures.get(index).copied()
    }

    /// Iterate over `(timestamp, temperature)` pairs without parsing
    pub fn pairs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.times
            .iter()
            .map(String::as_str)
            .zip(self.temperatures.iter().copied())
    }

    /// Parse every timestamp; the first malformed one aborts
    pub fn samples(&self) -> Result<Vec<HourlySample>, ReportError> {
        self.pairs()
            .map(|(time, temperature)| HourlySample::parse(time, temperature))
            .collect()
    }
}
