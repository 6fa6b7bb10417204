//! Place lookup
//!
//! Resolves one free-text query to at most one [`PlaceDetails`] record through
//! an external place search service.

pub mod error;
pub mod google;

use async_trait::async_trait;

use crate::models::PlaceDetails;

pub use error::{LookupError, Result};
pub use google::GooglePlacesClient;

/// Maps a free-text query to at most one place
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// Look up the best match for `query`
    ///
    /// Returns `Ok(None)` when the service has no reliable match. Every
    /// transport or payload problem is reported as a [`LookupError`].
    async fn lookup(&self, query: &str) -> Result<Option<PlaceDetails>>;
}
