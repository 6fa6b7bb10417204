use thiserror::Error;

/// Failure of a single place lookup
///
/// A lookup that finds no confident match is not an error, see
/// [`PlaceLookup::lookup`](super::PlaceLookup::lookup).
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Places API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::ParseError(err.to_string())
        } else {
            LookupError::NetworkError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
