//! Error types and handling for the trip planner

use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failures talking to the text generation model
    #[error("Generation error: {message}")]
    Generation { message: String },

    /// The model answered, but not with a usable itinerary
    #[error("Invalid generated output: {message}")]
    InvalidOutput { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new generation error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a new invalid output error
    pub fn invalid_output<S: Into<String>>(message: S) -> Self {
        Self::InvalidOutput {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            PlannerError::Generation { .. } => {
                "Unable to reach the itinerary generator. Please try again later.".to_string()
            }
            PlannerError::InvalidOutput { .. } => {
                "The itinerary generator returned an unusable plan. Please try again.".to_string()
            }
            PlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = PlannerError::config("missing API key");
        assert!(matches!(config_err, PlannerError::Config { .. }));

        let generation_err = PlannerError::generation("connection failed");
        assert!(matches!(generation_err, PlannerError::Generation { .. }));

        let validation_err = PlannerError::validation("blank prompt");
        assert!(matches!(validation_err, PlannerError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = PlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let generation_err = PlannerError::generation("test");
        assert!(generation_err.user_message().contains("Unable to reach"));

        let validation_err = PlannerError::validation("prompt cannot be empty");
        assert!(validation_err.user_message().contains("prompt cannot be empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: PlannerError = io_err.into();
        assert!(matches!(planner_err, PlannerError::Io { .. }));
    }
}
