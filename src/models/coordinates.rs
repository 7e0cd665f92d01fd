use crate::constants::{DEFAULT_REFERENCE_LAT, DEFAULT_REFERENCE_LNG};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Point used for air-quality lookups when a route has no better one
    pub fn default_reference() -> Self {
        Coordinates {
            lat: DEFAULT_REFERENCE_LAT,
            lng: DEFAULT_REFERENCE_LNG,
        }
    }
}
