//! Error types for the roteiro core.

use thiserror::Error;

/// Errors that can occur in itinerary operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Address has not been located yet. Resolve it before saving")]
    Unresolved,

    #[error("An address lookup is already in progress")]
    LookupInProgress,

    #[error("Geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),
}

/// Failures talking to the geocoding service.
///
/// An empty result list is not an error; see `Resolution::NotFound`.
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service answered with HTTP {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GeocodeError::Malformed(e.to_string())
        } else {
            GeocodeError::Transport(e.to_string())
        }
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
