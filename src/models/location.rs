//! Location model for the caller's approximate position

/// Approximate position of the caller, resolved once per run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Locality name
    pub city: String,
    /// Country name
    pub country: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(
        latitude: f64,
        longitude: f64,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            city: city.into(),
            country: country.into(),
        }
    }

    /// Header used in front of the current temperature, e.g. `Germany / Berlin`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.country, self.city)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
