//! Reference collection
//!
//! Walks the days of an itinerary and emits one [`EnrichmentTarget`] per hotel
//! or activity that has a usable name.

use std::fmt;

use tracing::debug;

use crate::models::{Day, PlaceDetails};

/// Position of a single place slot inside a list of days
///
/// Each value names exactly one `place_details` field, so targets built from
/// distinct `SlotRef`s never write to the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRef {
    /// The hotel of day `day`
    Hotel { day: usize },
    /// Activity `index` of day `day`
    Activity { day: usize, index: usize },
}

impl SlotRef {
    /// Borrow the slot this reference points at
    ///
    /// Returns `None` if the tree no longer has an entity at this position.
    pub fn place_details_mut<'a>(&self, days: &'a mut [Day]) -> Option<&'a mut Option<PlaceDetails>> {
        match *self {
            SlotRef::Hotel { day } => days
                .get_mut(day)?
                .hotel
                .as_mut()
                .map(|hotel| &mut hotel.place_details),
            SlotRef::Activity { day, index } => days
                .get_mut(day)?
                .activities
                .as_mut()?
                .get_mut(index)
                .map(|activity| &mut activity.place_details),
        }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotRef::Hotel { day } => write!(f, "day {} hotel", day + 1),
            SlotRef::Activity { day, index } => {
                write!(f, "day {} activity {}", day + 1, index + 1)
            }
        }
    }
}

/// A pending place reference: what to look up and where to store it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentTarget {
    pub slot: SlotRef,
    pub query: String,
}

/// Service for collecting enrichment targets from an itinerary
pub struct ReferenceCollector;

impl ReferenceCollector {
    /// Collect targets in day order; within a day the hotel comes first,
    /// then activities in list order
    ///
    /// Hotels and activities with a missing or blank name are skipped.
    pub fn collect(days: &[Day], location_hint: &str) -> Vec<EnrichmentTarget> {
        let mut targets = Vec::new();
        let mut skipped = 0usize;

        for (day_index, day) in days.iter().enumerate() {
            if let Some(hotel) = &day.hotel {
                match eligible_name(hotel.hotel_name.as_deref()) {
                    Some(name) => targets.push(EnrichmentTarget {
                        slot: SlotRef::Hotel { day: day_index },
                        query: build_query(name, location_hint),
                    }),
                    None => skipped += 1,
                }
            }

            for (index, activity) in day.activities.iter().flatten().enumerate() {
                match eligible_name(activity.name.as_deref()) {
                    Some(name) => targets.push(EnrichmentTarget {
                        slot: SlotRef::Activity {
                            day: day_index,
                            index,
                        },
                        query: build_query(name, location_hint),
                    }),
                    None => skipped += 1,
                }
            }
        }

        if skipped > 0 {
            debug!("Skipped {} entries without a usable name", skipped);
        }
        debug!("Collected {} enrichment targets", targets.len());

        targets
    }
}

fn eligible_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}

/// `"{name}, {location}"`, or just the name when there is no location
fn build_query(name: &str, location_hint: &str) -> String {
    let location_hint = location_hint.trim();
    if location_hint.is_empty() {
        name.to_string()
    } else {
        format!("{name}, {location_hint}")
    }
}
