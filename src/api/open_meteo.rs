//! Hourly temperature forecast (`Open-Meteo`)

use super::{ApiClient, decode_json};
use crate::ReportError;
use crate::config::ForecastConfig;
use crate::models::HourlyForecast;
use serde::Deserialize;
use tracing::{debug, info, instrument};

const OPERATION: &str = "forecast";

/// Forecast response from `Open-Meteo`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub hourly: Option<HourlyData>,
}

/// Hourly series from `Open-Meteo`, index-aligned.
///
/// The provider sends `null` for hours it has no value for; those decode
/// to the zero value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HourlyData {
    pub time: Option<Vec<Option<String>>>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<Vec<Option<f64>>>,
}

impl TryFrom<ForecastResponse> for HourlyForecast {
    type Error = ReportError;

    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        let hourly = response.hourly.unwrap_or_default();
        let times = hourly
            .time
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        let temperatures = hourly
            .temperature
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        HourlyForecast::new(times, temperatures)
    }
}

/// Build the request URL; coordinates pass through unvalidated
#[must_use]
pub fn forecast_url(config: &ForecastConfig, latitude: f64, longitude: f64) -> String {
    format!(
        "{}?latitude={:.6}&longitude={:.6}&hourly={}&timezone={}",
        config.base_url, latitude, longitude, config.hourly, config.timezone
    )
}

/// Decode a forecast response body
pub fn parse_forecast(body: &str) -> Result<HourlyForecast, ReportError> {
    let response: ForecastResponse = decode_json(OPERATION, body)?;
    debug!(
        "Forecast for ({:.4}, {:.4}) in timezone '{}'",
        response.latitude,
        response.longitude,
        response.timezone.as_deref().unwrap_or_default()
    );
    HourlyForecast::try_from(response)
}

impl ApiClient {
    /// Fetch the hourly temperature series for the given coordinates
    #[instrument(skip(self))]
    pub fn hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlyForecast, ReportError> {
        let url = forecast_url(&self.config.forecast, latitude, longitude);
        debug!("Open-Meteo request URL: {}", url);

        let body = self.fetch_text(OPERATION, &url)?;
        let forecast = parse_forecast(&body)?;

        info!("Retrieved forecast with {} hourly samples", forecast.len());
        Ok(forecast)
    }
}
