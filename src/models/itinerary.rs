//! Itinerary tree produced by the generation model
//!
//! Field names follow the camelCase JSON the model is asked to emit. Fields the
//! enrichment pass does not read are carried through untouched, and absent
//! values stay absent on serialization.

use serde::{Deserialize, Deserializer, Serialize, de};

use super::PlaceDetails;

/// A complete multi-day trip plan
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    /// Destination, also used to disambiguate every place lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "truncating_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_of_people: Option<u32>,
    /// e.g. "honeymoon", "historic", "beach"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Day>>,
}

impl TripPlan {
    /// Location hint used as lookup context, empty when unknown
    #[must_use]
    pub fn location_hint(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}

/// One day of a trip
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(
        default,
        deserialize_with = "truncating_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub day_number: Option<u32>,
    /// e.g. "2025-10-30"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Hotel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
}

/// Daily weather forecast, passed through as generated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Temperature in Celsius
    #[serde(
        default,
        deserialize_with = "truncating_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<i32>,
    /// e.g. "Sunny", "Cloudy"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Hotel suggested for a day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    /// Filled in by the enrichment pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_details: Option<PlaceDetails>,
}

impl Hotel {
    /// Create a hotel with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            hotel_name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Activity planned for a day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// e.g. "2 hours", "45 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Filled in by the enrichment pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_details: Option<PlaceDetails>,
}

impl Activity {
    /// Create an activity with just a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Wrapper for the alternatives variant: several candidate days
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOptionsPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_options: Option<Vec<Day>>,
}

/// Request for alternative plans of a single day
///
/// e.g. `{ "location": "Rome", "dayNumber": 2, "preferences": "art, low budget", "numberOfOptions": 3 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOptionsRequest {
    pub location: String,
    pub day_number: u32,
    #[serde(default)]
    pub preferences: String,
    pub number_of_options: u32,
}

/// Request for a complete trip plan from a free-text prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub prompt: String,
}

/// Accept any JSON number for an integer field, dropping the fraction
///
/// The model sometimes answers `21.5` where a whole number is expected.
fn truncating_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(number) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if !number.is_finite() {
        return Err(de::Error::custom(format!("expected a number, got {number}")));
    }
    T::try_from(number.trunc() as i64)
        .map(Some)
        .map_err(|_| de::Error::custom(format!("number {number} is out of range")))
}
