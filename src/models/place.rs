//! Verified place metadata returned by the place lookup service

use serde::{Deserialize, Serialize};

/// Maximum number of photo URLs kept per place
pub const MAX_PHOTOS: usize = 3;

/// Verified metadata for a named place
///
/// Unknown text fields are empty and unknown numbers are `0.0`; a record
/// always carries a non-empty `place_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    /// Identifier assigned by the lookup service
    pub place_id: String,
    #[serde(default)]
    pub formatted_address: String,
    /// Latitude in decimal degrees
    #[serde(default)]
    pub lat: f64,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub website: String,
    /// Average user rating, `0.0` if unknown
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub phone_number: String,
    /// Price tier tag, e.g. `PRICE_LEVEL_MODERATE`
    #[serde(default)]
    pub price_level: String,
    /// Fully qualified photo media URLs, at most [`MAX_PHOTOS`]
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

impl PlaceDetails {
    /// Create a record with only the identifier set
    #[must_use]
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            ..Self::default()
        }
    }

    /// Format coordinates as a string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}
