//! Trip planning service
//!
//! Generates an itinerary with the text model and enriches it with verified
//! place details before handing it back.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

use crate::enrichment::ItineraryAssembler;
use crate::generation::{PlanGenerator, prompts};
use crate::models::{DailyOptionsPlan, DailyOptionsRequest, Day, TripPlan};
use crate::places::PlaceLookup;
use crate::{PlannerError, Result};

/// Upper bound for alternatives requested in one call
pub const MAX_DAILY_OPTIONS: u32 = 10;

/// Service combining itinerary generation and enrichment
#[derive(Clone)]
pub struct TripPlanService {
    generator: Arc<dyn PlanGenerator>,
    assembler: ItineraryAssembler,
}

impl TripPlanService {
    pub fn new(generator: Arc<dyn PlanGenerator>, lookup: Arc<dyn PlaceLookup>) -> Self {
        Self {
            generator,
            assembler: ItineraryAssembler::new(lookup),
        }
    }

    /// Generate and enrich a complete trip plan from a free-text prompt
    ///
    /// Returns `None` when the model answers with `null`.
    #[instrument(skip(self))]
    pub async fn generate_trip_plan(&self, prompt: &str) -> Result<Option<TripPlan>> {
        if prompt.trim().is_empty() {
            return Err(PlannerError::validation("Prompt cannot be empty"));
        }

        let system_prompt = prompts::trip_plan_system_prompt();
        let raw = self.generator.generate_json(&system_prompt, prompt).await?;

        let Some(mut plan) = parse_generated::<TripPlan>(&raw)? else {
            warn!("Model returned no plan, skipping enrichment");
            return Ok(None);
        };

        info!(
            location = plan.location_hint(),
            days = plan.days.as_ref().map_or(0, Vec::len),
            "Generated trip plan"
        );
        self.assembler.assemble(&mut plan).await;

        Ok(Some(plan))
    }

    /// Generate and enrich alternative plans for a single day
    ///
    /// An answer without options yields an empty list.
    #[instrument(skip(self, request), fields(location = %request.location, day = request.day_number))]
    pub async fn generate_daily_options(&self, request: &DailyOptionsRequest) -> Result<Vec<Day>> {
        validate_daily_options_request(request)?;

        let (system_prompt, user_prompt) = prompts::daily_options_prompts(request);
        let raw = self
            .generator
            .generate_json(&system_prompt, &user_prompt)
            .await?;

        let Some(mut options) =
            parse_generated::<DailyOptionsPlan>(&raw)?.and_then(|plan| plan.daily_options)
        else {
            warn!("Model returned no daily options");
            return Ok(Vec::new());
        };

        info!("Generated {} daily options", options.len());
        self.assembler
            .assemble_options(&mut options, &request.location)
            .await;

        Ok(options)
    }
}

fn validate_daily_options_request(request: &DailyOptionsRequest) -> Result<()> {
    if request.location.trim().is_empty() {
        return Err(PlannerError::validation("Location cannot be empty"));
    }

    if request.number_of_options == 0 || request.number_of_options > MAX_DAILY_OPTIONS {
        return Err(PlannerError::validation(format!(
            "numberOfOptions must be between 1 and {MAX_DAILY_OPTIONS}"
        )));
    }

    Ok(())
}

/// Parse model output, tolerating a surrounding markdown code fence
fn parse_generated<T: DeserializeOwned>(raw: &str) -> Result<Option<T>> {
    let json = strip_code_fence(raw);
    serde_json::from_str::<Option<T>>(json)
        .map_err(|e| PlannerError::invalid_output(format!("Generated itinerary is not valid: {e}")))
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (e.g. "json") on the opening line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
