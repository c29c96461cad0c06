//! Report pipeline
//!
//! Geolocation, forecast, daily aggregation and presentation, strictly in
//! that order. The report is rendered completely before anything is printed.

use crate::ReportError;
use crate::aggregate::aggregate_daily;
use crate::api::ApiClient;
use crate::models::{DaySummary, HourlyForecast, Location};
use crate::present::Presenter;
use chrono::{Local, Timelike};
use tracing::info;

/// Everything needed to print one run's report
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// Where the caller appears to be
    pub location: Location,
    /// Raw hourly series, index 0 assumed to be local midnight today
    pub forecast: HourlyForecast,
    /// One summary per calendar date, unordered
    pub days: Vec<DaySummary>,
}

impl WeatherReport {
    /// Fetch and aggregate a report; the first failure aborts
    pub fn fetch(client: &ApiClient) -> Result<Self, ReportError> {
        let location = client.locate()?;
        let forecast = client.hourly_forecast(location.latitude, location.longitude)?;
        let days = aggregate_daily(&forecast)?;

        info!(
            "Built report for {} with {} days",
            location.display_name(),
            days.len()
        );

        Ok(Self {
            location,
            forecast,
            days,
        })
    }

    /// Render the report for the given wall-clock hour
    #[must_use]
    pub fn render(&self, presenter: &Presenter, hour: usize) -> String {
        presenter.render(&self.location, &self.forecast, &self.days, hour)
    }
}

/// Current local hour of day, used as an index into the hourly series
#[must_use]
pub fn current_hour() -> usize {
    Local::now().hour() as usize
}

/// Fetch and render a complete report for the current hour
pub fn generate(client: &ApiClient, presenter: &Presenter) -> Result<String, ReportError> {
    let report = WeatherReport::fetch(client)?;
    Ok(report.render(presenter, current_hour()))
}
