//! Travel restrictions provider port
//!
//! Defines how the orchestrator reaches the restrictions provider. The port
//! only transports: it reports whatever status and body came back and leaves
//! classification to the application.

use async_trait::async_trait;
use domain::TripRequest;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Body of a provider reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// The full body was read
    Bytes(Vec<u8>),
    /// Reading failed part way through
    Unreadable(String),
    /// The body exceeded the size limit and was discarded
    TooLarge {
        /// Configured limit in bytes
        limit: usize,
    },
}

/// Unclassified reply from the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status, if known
    pub reason: Option<String>,
    /// Body, or why it is unavailable
    pub body: ReplyBody,
}

impl ProviderReply {
    /// Reply with a readable body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: None,
            body: ReplyBody::Bytes(body.into()),
        }
    }

    /// Attach a reason phrase
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Port for the travel restrictions provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TravelRestrictionsPort: Send + Sync {
    /// Perform one outbound lookup for the trip
    ///
    /// Implementations must not retry. Errors are limited to failures that
    /// prevent any reply at all (network or configuration).
    async fn fetch(&self, request: &TripRequest) -> Result<ProviderReply, ApplicationError>;
}
