//! Blocking HTTP client for the geolocation and forecast services
//!
//! Each call performs one request, buffers the whole body and decodes it.
//! There is no retry; the first failure is returned to the caller.

pub mod geolocation;
pub mod open_meteo;

use crate::ReportError;
use crate::config::ReporterConfig;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Responses slower than this are logged as a warning
const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// HTTP client shared by the geolocation and forecast lookups
pub struct ApiClient {
    /// HTTP client
    client: Client,
    /// Endpoint configuration
    config: ReporterConfig,
}

impl ApiClient {
    /// Create a new API client; empty settings fall back to their defaults
    pub fn new(mut config: ReporterConfig) -> Result<Self, ReportError> {
        config.apply_defaults();
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.http.user_agent.clone());
        if let Some(seconds) = config.http.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ReportError::network("client setup", e))?;

        Ok(Self { client, config })
    }

    /// Fetch `url` and return the full response body
    #[instrument(skip(self))]
    fn fetch_text(&self, operation: &'static str, url: &str) -> Result<String, ReportError> {
        let start_time = Instant::now();
        debug!("Starting HTTP request");

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ReportError::network(operation, e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ReportError::network(operation, e))?;

        let total_duration = start_time.elapsed();
        info!(
            "{} request finished with {} in {:.3}s ({} bytes)",
            operation,
            status,
            total_duration.as_secs_f64(),
            body.len()
        );
        if total_duration > SLOW_RESPONSE {
            warn!(
                "Slow {} response: {:.3}s",
                operation,
                total_duration.as_secs_f64()
            );
        }

        Ok(body)
    }
}

/// Decode a buffered response body
pub(crate) fn decode_json<T: DeserializeOwned>(
    operation: &'static str,
    body: &str,
) -> Result<T, ReportError> {
    serde_json::from_str(body).map_err(|e| ReportError::decode(operation, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u8,
    }

    #[test]
    fn test_decode_json_reports_operation() {
        let err = decode_json::<Probe>("geolocation", "<html>").unwrap_err();
        assert!(matches!(err, ReportError::Decode { operation: "geolocation", .. }));
    }

    #[test]
    fn test_decode_json_ok() {
        let probe: Probe = decode_json("forecast", r#"{"value": 7, "extra": true}"#).unwrap();
        assert_eq!(probe.value, 7);
    }

    #[test]
    fn test_client_fills_empty_settings_with_defaults() {
        let mut config = ReporterConfig::with_endpoints("", "");
        config.logging.level.clear();
        let client = ApiClient::new(config).unwrap();
        assert_eq!(client.config.geolocation.url, "https://ipwho.is/");
        assert_eq!(client.config.forecast.base_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(client.config.logging.level, "warn");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ReporterConfig::with_endpoints("not a url", "https://example.com");
        assert!(matches!(ApiClient::new(config), Err(ReportError::Config { .. })));
    }
}
