//! Error types for the data fetcher.

use thiserror::Error;

/// Failure while fetching a Pokémon record.
///
/// Only the random-fetch path surfaces these: name lookups absorb every
/// failure into `None` so the caller can fall back to a random pick.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure or a response body that did not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("service returned status {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, FetchError>;
