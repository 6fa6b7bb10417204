//! Itinerary enrichment
//!
//! Attaches verified [`PlaceDetails`](crate::models::PlaceDetails) to every
//! named hotel and activity of a generated itinerary:
//! - Collector: finds the place references and the slot each one fills
//! - Engine: resolves all references concurrently and writes the results back
//! - Assembler: runs a whole pass over a trip plan or a set of day options

pub mod assembler;
pub mod collector;
pub mod engine;

pub use assembler::ItineraryAssembler;
pub use collector::{EnrichmentTarget, ReferenceCollector, SlotRef};
pub use engine::{EnrichmentEngine, EnrichmentSummary, LookupOutcome, Resolution, write_back};
