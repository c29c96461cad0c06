//! Configuration for `ipweather`
//!
//! The binary runs with built-in defaults only. The structure is still
//! deserialisable so that alternate endpoints can be supplied by library
//! users and tests.

use crate::ReportError;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// IP geolocation endpoint configuration
    #[serde(default)]
    pub geolocation: GeolocationConfig,
    /// Forecast endpoint configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// IP geolocation endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationConfig {
    /// Fixed lookup URL; the service geolocates the caller's address
    #[serde(default = "default_geolocation_url")]
    pub url: String,
}

/// Forecast endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Base URL of the forecast endpoint, without query string
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,
    /// Hourly variable to request
    #[serde(default = "default_forecast_hourly")]
    pub hourly: String,
    /// Timezone resolution passed to the provider
    #[serde(default = "default_forecast_timezone")]
    pub timezone: String,
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; `None` keeps the transport default
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geolocation_url() -> String {
    "https://ipwho.is/".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_forecast_hourly() -> String {
    "temperature_2m".to_string()
}

fn default_forecast_timezone() -> String {
    "auto".to_string()
}

fn default_user_agent() -> String {
    format!("ipweather/{}", crate::VERSION)
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            url: default_geolocation_url(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_base_url(),
            hourly: default_forecast_hourly(),
            timezone: default_forecast_timezone(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ReporterConfig {
    /// Default configuration with the two endpoints replaced
    #[must_use]
    pub fn with_endpoints(
        geolocation_url: impl Into<String>,
        forecast_base_url: impl Into<String>,
    ) -> Self {
        let mut config = Self::default();
        config.geolocation.url = geolocation_url.into();
        config.forecast.base_url = forecast_base_url.into();
        config
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.geolocation.url.is_empty() {
            self.geolocation.url = default_geolocation_url();
        }
        if self.forecast.base_url.is_empty() {
            self.forecast.base_url = default_forecast_base_url();
        }
        if self.forecast.hourly.is_empty() {
            self.forecast.hourly = default_forecast_hourly();
        }
        if self.forecast.timezone.is_empty() {
            self.forecast.timezone = default_forecast_timezone();
        }
        if self.http.user_agent.is_empty() {
            self.http.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<(), ReportError> {
        self.validate_urls()?;
        self.validate_logging()?;

        if self.http.timeout_seconds == Some(0) {
            return Err(ReportError::config(
                "HTTP timeout must be at least 1 second when set",
            ));
        }

        Ok(())
    }

    fn validate_urls(&self) -> Result<(), ReportError> {
        for (name, url) in [
            ("geolocation", &self.geolocation.url),
            ("forecast", &self.forecast.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ReportError::config(format!(
                    "The {name} URL must be a valid HTTP or HTTPS URL, got '{url}'"
                )));
            }
        }
        Ok(())
    }

    fn validate_logging(&self) -> Result<(), ReportError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ReportError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ReportError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}
