use std::sync::Arc;

use tracing::{instrument, warn};

use super::collector::ReferenceCollector;
use super::engine::{EnrichmentEngine, EnrichmentSummary};
use crate::models::{Day, TripPlan};
use crate::places::PlaceLookup;

/// Runs one enrichment pass over a generated itinerary
#[derive(Clone)]
pub struct ItineraryAssembler {
    engine: EnrichmentEngine,
}

impl ItineraryAssembler {
    pub fn new(lookup: Arc<dyn PlaceLookup>) -> Self {
        Self {
            engine: EnrichmentEngine::new(lookup),
        }
    }

    /// Enrich a trip plan in place
    ///
    /// A plan without days is left unchanged. Only `place_details` fields are
    /// ever written; no entity is added, removed or reordered.
    #[instrument(name = "assemble_plan", skip_all, fields(location = plan.location_hint()))]
    pub async fn assemble(&self, plan: &mut TripPlan) {
        let TripPlan { location, days, .. } = plan;

        let Some(days) = days.as_mut() else {
            warn!("Generated plan has no days, skipping enrichment");
            return;
        };

        self.enrich_days(days, location.as_deref().unwrap_or_default())
            .await;
    }

    /// Enrich alternative day plans in place, using `location_hint` as context
    #[instrument(name = "assemble_options", skip(self, options), fields(options = options.len()))]
    pub async fn assemble_options(&self, options: &mut [Day], location_hint: &str) {
        self.enrich_days(options, location_hint).await;
    }

    async fn enrich_days(&self, days: &mut [Day], location_hint: &str) -> EnrichmentSummary {
        let targets = ReferenceCollector::collect(days, location_hint);
        self.engine.enrich(days, targets).await
    }
}
