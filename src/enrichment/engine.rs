//! Enrichment engine
//!
//! Resolves every target concurrently through a [`PlaceLookup`], waits for all
//! lookups to finish, then writes the results back into their slots. A failed
//! lookup only affects its own slot.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures::FutureExt;
use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use super::collector::{EnrichmentTarget, SlotRef};
use crate::models::{Day, PlaceDetails};
use crate::places::PlaceLookup;

/// Terminal state of one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(PlaceDetails),
    NotFound,
    Failed(String),
}

/// Outcome of one target, ready to be written back
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub slot: SlotRef,
    pub query: String,
    pub outcome: LookupOutcome,
}

/// Counts of one enrichment pass, for logging only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub succeeded: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl EnrichmentSummary {
    /// Number of targets accounted for
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.not_found + self.failed
    }
}

/// Fans out place lookups and joins them
#[derive(Clone)]
pub struct EnrichmentEngine {
    lookup: Arc<dyn PlaceLookup>,
}

impl EnrichmentEngine {
    /// Create an engine backed by the given lookup client
    pub fn new(lookup: Arc<dyn PlaceLookup>) -> Self {
        Self { lookup }
    }

    /// Resolve all targets and store the results in `days`
    ///
    /// Never fails: slots whose lookup did not succeed are left as they were.
    #[instrument(name = "enrich", skip_all, fields(targets = targets.len()))]
    pub async fn enrich(&self, days: &mut [Day], targets: Vec<EnrichmentTarget>) -> EnrichmentSummary {
        if targets.is_empty() {
            debug!("No enrichment targets, nothing to do");
            return EnrichmentSummary::default();
        }

        info!("Starting enrichment for {} items", targets.len());
        let start_time = Instant::now();

        let resolutions = self.resolve(targets).await;
        let summary = write_back(days, resolutions);

        info!(
            succeeded = summary.succeeded,
            not_found = summary.not_found,
            failed = summary.failed,
            "Enrichment complete in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );

        summary
    }

    /// Look up every target concurrently and wait until all are terminal
    ///
    /// One lookup is started per target, all at once. Results come back in
    /// target order.
    pub async fn resolve(&self, targets: Vec<EnrichmentTarget>) -> Vec<Resolution> {
        if targets.is_empty() {
            return Vec::new();
        }

        join_all(targets.into_iter().map(|target| self.resolve_one(target))).await
    }

    async fn resolve_one(&self, target: EnrichmentTarget) -> Resolution {
        let EnrichmentTarget { slot, query } = target;
        debug!(%slot, "Looking up {}", query);

        let result = AssertUnwindSafe(self.lookup.lookup(&query))
            .catch_unwind()
            .await;

        let outcome = match result {
            Ok(Ok(Some(details))) => LookupOutcome::Found(details),
            Ok(Ok(None)) => {
                warn!(%slot, "No place details found for: {}", query);
                LookupOutcome::NotFound
            }
            Ok(Err(e)) => {
                warn!(%slot, "Place lookup failed for {}: {}", query, e);
                LookupOutcome::Failed(e.to_string())
            }
            Err(_) => {
                warn!(%slot, "Place lookup panicked for: {}", query);
                LookupOutcome::Failed("lookup panicked".to_string())
            }
        };

        Resolution {
            slot,
            query,
            outcome,
        }
    }
}

/// Apply resolved lookups to their slots
///
/// Found details replace whatever the slot held before; not-found and failed
/// outcomes leave the slot untouched.
pub fn write_back(days: &mut [Day], resolutions: Vec<Resolution>) -> EnrichmentSummary {
    let mut summary = EnrichmentSummary::default();

    for Resolution {
        slot,
        query,
        outcome,
    } in resolutions
    {
        match outcome {
            LookupOutcome::Found(details) => match slot.place_details_mut(days) {
                Some(place_details) => {
                    debug!(%slot, "Resolved {} at ({})", query, details.format_coordinates());
                    *place_details = Some(details);
                    summary.succeeded += 1;
                }
                None => {
                    warn!(%slot, "Slot for {} no longer exists, dropping result", query);
                    summary.failed += 1;
                }
            },
            LookupOutcome::NotFound => summary.not_found += 1,
            LookupOutcome::Failed(_) => summary.failed += 1,
        }
    }

    summary
}
