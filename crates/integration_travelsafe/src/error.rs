//! Travelsafe error types

use thiserror::Error;

/// Errors that can occur before or while talking to the travelsafe API
///
/// HTTP error statuses are not represented here: the client returns them as a
/// [`RawResponse`](crate::RawResponse) for the caller to classify.
#[derive(Debug, Error)]
pub enum TravelSafeError {
    /// Origin or destination could not be turned into a query
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// DNS, connect or I/O failure while sending the request
    #[error("Network error: {0}")]
    Network(String),

    /// Client or endpoint configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),
}
