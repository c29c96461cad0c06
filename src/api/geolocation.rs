//! IP geolocation lookup (`ipwho.is`)

use super::{ApiClient, decode_json};
use crate::ReportError;
use crate::models::Location;
use serde::Deserialize;
use tracing::{info, instrument};

const OPERATION: &str = "geolocation";

/// Fields consumed from the geolocation response; absent or `null` fields keep their zero value
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeolocationResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<GeolocationResponse> for Location {
    fn from(response: GeolocationResponse) -> Self {
        Location::new(
            response.latitude.unwrap_or_default(),
            response.longitude.unwrap_or_default(),
            response.city.unwrap_or_default(),
            response.country.unwrap_or_default(),
        )
    }
}

/// Decode a geolocation response body
pub fn parse_location(body: &str) -> Result<Location, ReportError> {
    let response: GeolocationResponse = decode_json(OPERATION, body)?;
    Ok(response.into())
}

impl ApiClient {
    /// Resolve the caller's approximate location from their public IP address
    #[instrument(skip(self))]
    pub fn locate(&self) -> Result<Location, ReportError> {
        let body = self.fetch_text(OPERATION, &self.config.geolocation.url)?;
        let location = parse_location(&body)?;

        info!(
            "Located caller in {} at ({})",
            location.display_name(),
            location.format_coordinates()
        );
        Ok(location)
    }
}
