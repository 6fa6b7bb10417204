//! Prompt and output schema construction

use serde_json::{Value, json};

use crate::models::DailyOptionsRequest;

/// System prompt for a complete multi-day trip plan
#[must_use]
pub fn trip_plan_system_prompt() -> String {
    format!(
        r#"You are a master travel planner. Your job is to create a detailed,
logical, and inspiring travel itinerary based on the user's request.

- You must infer the number of days from the start and end date.
- Each day in the 'days' list MUST have its own daily weather forecast.

*** HOTEL INSTRUCTIONS ***
- You MUST suggest a DIFFERENT hotel for each day of the trip.
- Do NOT repeat the same hotel name for consecutive days unless specifically asked.
- The goal is to give the user a variety of options to choose from.

- Each day MUST have a list of 'activities'.
- Each 'activity' MUST have a name, an estimated price, and a duration.
- Be specific with names (e.g., "Louvre Museum", not just "a museum").

{}"#,
        format_instructions(&trip_plan_schema())
    )
}

/// System and user prompts for alternative plans of a single day
#[must_use]
pub fn daily_options_prompts(request: &DailyOptionsRequest) -> (String, String) {
    let system_prompt = format!(
        r#"You are a travel planner. Your job is to create several
alternative, detailed, and inspiring travel plans for a single day.

- You MUST generate exactly {options} different options.
- Each option MUST be a complete 'Day' object.
- Each 'Day' object must have its own weather, a single hotel,
  and a list of activities.

*** CRITICAL HOTEL INSTRUCTION ***
- Each of the generated options MUST feature a DIFFERENT hotel.
- Do NOT repeat the same hotel across the different options.
- The goal is to provide variety (e.g., different styles or locations).

- All plans should be for Day {day} in {location}.
- The user's preferences are: {preferences}.

{format}"#,
        options = request.number_of_options,
        day = request.day_number,
        location = request.location,
        preferences = request.preferences,
        format = format_instructions(&daily_options_schema()),
    );

    let user_prompt = format!(
        "Generate {} options for Day {} in {}.",
        request.number_of_options, request.day_number, request.location
    );

    (system_prompt, user_prompt)
}

fn format_instructions(schema: &Value) -> String {
    format!(
        "You MUST return your response in the following JSON format.\n\
Do not include any explanations, only provide a RFC8259 compliant JSON response \
following this format without deviation.\n\
Do not include markdown code blocks in your response.\n\
Here is the JSON Schema instance your output must adhere to:\n{schema:#}"
    )
}

fn place_details_omitted() -> &'static str {
    "placeDetails is filled in later and must not be generated"
}

fn day_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "dayNumber": { "type": "integer" },
            "date": { "type": "string", "description": "ISO date, e.g. 2025-10-30" },
            "weather": {
                "type": "object",
                "properties": {
                    "temperature": { "type": "integer", "description": "Celsius" },
                    "condition": { "type": "string" }
                }
            },
            "hotel": {
                "type": "object",
                "description": place_details_omitted(),
                "properties": {
                    "hotelName": { "type": "string" },
                    "location": { "type": "string" },
                    "pricePerNight": { "type": "number" }
                }
            },
            "activities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "description": place_details_omitted(),
                    "properties": {
                        "name": { "type": "string" },
                        "price": { "type": "number" },
                        "duration": { "type": "string", "description": "e.g. 2 hours" }
                    }
                }
            }
        }
    })
}

fn trip_plan_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "location": { "type": "string" },
            "budget": { "type": "number" },
            "startDate": { "type": "string" },
            "endDate": { "type": "string" },
            "numberOfPeople": { "type": "integer" },
            "theme": { "type": "string", "description": "e.g. honeymoon, historic, beach" },
            "days": { "type": "array", "items": day_schema() }
        }
    })
}

fn daily_options_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "dailyOptions": { "type": "array", "items": day_schema() }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_plan_prompt_embeds_schema() {
        let prompt = trip_plan_system_prompt();
        assert!(prompt.contains("DIFFERENT hotel"));
        assert!(prompt.contains("\"hotelName\""));
        assert!(prompt.contains("\"numberOfPeople\""));
    }

    #[test]
    fn test_daily_options_prompts() {
        let request = DailyOptionsRequest {
            location: "Rome".to_string(),
            day_number: 2,
            preferences: "art, low budget".to_string(),
            number_of_options: 3,
        };

        let (system_prompt, user_prompt) = daily_options_prompts(&request);
        assert!(system_prompt.contains("exactly 3 different options"));
        assert!(system_prompt.contains("Day 2 in Rome"));
        assert!(system_prompt.contains("art, low budget"));
        assert!(system_prompt.contains("\"dailyOptions\""));
        assert_eq!(user_prompt, "Generate 3 options for Day 2 in Rome.");
    }
}
