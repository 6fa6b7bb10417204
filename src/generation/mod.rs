//! Itinerary generation
//!
//! Boundary to the generative text model that produces the raw itinerary.
//! The model is asked for JSON matching a schema; the text it returns is
//! parsed by the planner.

pub mod gemini;
pub mod prompts;

use async_trait::async_trait;

pub use gemini::GeminiClient;

/// A text model that answers with JSON
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Run one generation and return the raw text of the answer
    async fn generate_json(&self, system_prompt: &str, user_prompt: &str) -> crate::Result<String>;
}
