//! Daily aggregation of hourly samples
//!
//! Samples are grouped by the calendar date of their naive local timestamp.
//! The result is in no particular order; callers sort by date for display.

use crate::ReportError;
use crate::models::{DaySummary, HourlyForecast, HourlySample};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// Parse the forecast and summarise it per calendar date.
///
/// Any malformed timestamp aborts the whole aggregation.
pub fn aggregate_daily(forecast: &HourlyForecast) -> Result<Vec<DaySummary>, ReportError> {
    let samples = forecast.samples()?;
    Ok(summarize_samples(&samples))
}

/// Group already-parsed samples by date and compute min/max per group
#[must_use]
pub fn summarize_samples(samples: &[HourlySample]) -> Vec<DaySummary> {
    let mut daily: HashMap<NaiveDate, Vec<f64>> = HashMap::new();
    for sample in samples {
        daily
            .entry(sample.timestamp.date())
            .or_default()
            .push(sample.temperature_celsius);
    }

    let summaries: Vec<DaySummary> = daily
        .into_iter()
        .filter_map(|(date, temps)| DaySummary::from_temperatures(date, &temps))
        .collect();

    debug!(
        "Aggregated {} hourly samples into {} days",
        samples.len(),
        summaries.len()
    );
    summaries
}
