use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{LookupError, PlaceLookup, Result};
use crate::PlannerError;
use crate::config::PlacesConfig;
use crate::models::PlaceDetails;
use crate::models::place::MAX_PHOTOS;

/// Only the fields copied into [`PlaceDetails`] are requested
const FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.location,\
places.websiteUri,places.rating,places.photos,places.priceLevel,places.nationalPhoneNumber";

const PHOTO_MAX_HEIGHT_PX: u32 = 800;

/// Google Places "Text Search (New)" client
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchTextRequest<'a> {
    text_query: &'a str,
    max_result_count: u8,
}

impl GooglePlacesClient {
    /// Create a new client
    pub fn new(config: &PlacesConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("tripplanner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlannerError::config(format!("Failed to create HTTP client: {e}")))?;

        let api_key = config.api_key.clone().unwrap_or_default();
        if api_key.is_empty() {
            warn!("Google Places API key is missing, place lookups will fail");
        }

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse the first candidate of a search response
    ///
    /// Unreadable fields fall back to empty text or `0.0`. A response without
    /// candidates, or whose first candidate has no id, is not a match.
    fn parse_place_details(&self, root: &Value) -> Result<Option<PlaceDetails>> {
        if !root.is_object() {
            return Err(LookupError::ParseError(
                "expected a JSON object in Places response".to_string(),
            ));
        }

        let Some(place) = root
            .get("places")
            .and_then(Value::as_array)
            .and_then(|places| places.first())
        else {
            return Ok(None);
        };

        let place_id = text_field(place, "id");
        if place_id.is_empty() {
            return Ok(None);
        }

        let location = place.get("location");

        Ok(Some(PlaceDetails {
            place_id,
            formatted_address: text_field(place, "formattedAddress"),
            lat: location.map_or(0.0, |l| number_field(l, "latitude")),
            lng: location.map_or(0.0, |l| number_field(l, "longitude")),
            website: text_field(place, "websiteUri"),
            rating: number_field(place, "rating"),
            phone_number: text_field(place, "nationalPhoneNumber"),
            price_level: text_field(place, "priceLevel"),
            photo_urls: self.parse_photo_urls(place.get("photos")),
        }))
    }

    /// Build media URLs for the first photos, in response order
    fn parse_photo_urls(&self, photos: Option<&Value>) -> Vec<String> {
        photos
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|photo| photo.get("name").and_then(Value::as_str))
            .filter(|name| !name.trim().is_empty())
            .take(MAX_PHOTOS)
            .map(|name| self.photo_url(name))
            .collect()
    }

    fn photo_url(&self, photo_name: &str) -> String {
        format!(
            "{}/{}/media?maxHeightPx={}&key={}",
            self.base_url,
            photo_name,
            PHOTO_MAX_HEIGHT_PX,
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl PlaceLookup for GooglePlacesClient {
    #[instrument(name = "place_lookup", skip(self))]
    async fn lookup(&self, query: &str) -> Result<Option<PlaceDetails>> {
        if query.trim().is_empty() {
            return Err(LookupError::InvalidQuery(
                "query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/places:searchText", self.base_url);
        let body = SearchTextRequest {
            text_query: query,
            max_result_count: 1,
        };

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await
            .map_err(|e| LookupError::NetworkError(format!("Places request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LookupError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let bytes = response.bytes().await?;
        let json: Value = serde_json::from_slice(&bytes).map_err(|e| {
            LookupError::ParseError(format!("Failed to parse Places response: {e}"))
        })?;
        debug!(response = %json, "Places API response");

        self.parse_place_details(&json)
    }
}

fn text_field(node: &Value, field: &str) -> String {
    node.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn number_field(node: &Value, field: &str) -> f64 {
    node.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}
