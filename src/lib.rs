//! `ipweather` - local temperature forecast for the caller's IP location
//!
//! This library geolocates the caller, fetches an hourly temperature
//! forecast, summarises it per day and renders a colour-coded report.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod present;
pub mod report;

// Re-export core types for public API
pub use aggregate::aggregate_daily;
pub use api::ApiClient;
pub use config::ReporterConfig;
pub use error::ReportError;
pub use models::{DaySummary, HourlyForecast, HourlySample, Location};
pub use present::{Presenter, TemperatureBand, format_temperature};
pub use report::WeatherReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
