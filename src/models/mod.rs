//! Data models for the trip planner
//!
//! This module contains the domain models organized by concern:
//! - Itinerary: the generated trip plan tree (plan, days, hotels, activities)
//! - Place: verified place metadata attached during enrichment

pub mod itinerary;
pub mod place;

// Re-export all public types for convenient access
pub use itinerary::{
    Activity, DailyOptionsPlan, DailyOptionsRequest, Day, Hotel, PlanRequest, TripPlan, Weather,
};
pub use place::PlaceDetails;
