//! Data models for `ipweather`
//!
//! This module contains the core domain models organized by concern:
//! - Location: where the caller appears to be
//! - Forecast: the hourly temperature series for that location
//! - Summary: per-day minimum and maximum temperatures

pub mod forecast;
pub mod location;
pub mod summary;

// Re-export all public types for convenient access
pub use forecast::{HourlyForecast, HourlySample, TIMESTAMP_LAYOUT};
pub use location::Location;
pub use summary::{DAY_LABEL_LAYOUT, DaySummary, format_day_label, parse_day_label};
