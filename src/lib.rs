//! `tripplanner` - AI travel itinerary planning with verified place details
//!
//! This library generates multi-day itineraries with a text model and
//! enriches every hotel and activity with metadata from a place lookup
//! service, resolving all lookups concurrently.

pub mod api;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod generation;
pub mod models;
pub mod places;
pub mod planner;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::PlannerConfig;
pub use enrichment::{EnrichmentEngine, EnrichmentSummary, ItineraryAssembler, ReferenceCollector};
pub use error::PlannerError;
pub use generation::{GeminiClient, PlanGenerator};
pub use models::{Activity, DailyOptionsRequest, Day, Hotel, PlaceDetails, TripPlan};
pub use places::{GooglePlacesClient, LookupError, PlaceLookup};
pub use planner::TripPlanService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;
