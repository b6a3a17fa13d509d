//! Application-level errors

use std::time::Duration;

use domain::DomainError;
use thiserror::Error;

/// Longest slice of a provider error body shown to users
const MAX_BODY_EXCERPT_CHARS: usize = 200;

/// Errors that can occur while resolving trip requirements
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Invalid user input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider could not be reached or the body could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with an error status
    #[error("Provider returned HTTP {status}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase, if known
        reason: Option<String>,
        /// Response body, if it could be read
        body: Option<String>,
    },

    /// The provider payload did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request ceiling elapsed before a reply arrived
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Message safe to show to the person who submitted the form
    ///
    /// Decode and configuration details are replaced with a generic
    /// sentence; provider bodies are truncated.
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::MissingField(field)) => {
                format!("Please enter the {field} country code.")
            },
            Self::Domain(e) => e.to_string(),
            Self::Transport(msg) => {
                format!("Could not reach the travel restrictions service: {msg}")
            },
            Self::Provider {
                status,
                reason,
                body,
            } => {
                let mut message =
                    format!("The travel restrictions service returned HTTP {status}");
                if let Some(reason) = reason {
                    message.push(' ');
                    message.push_str(reason);
                }
                if let Some(body) = body.as_deref().filter(|b| !b.is_empty()) {
                    message.push_str(": ");
                    message.push_str(&excerpt(body));
                }
                message
            },
            Self::Decode(_) => {
                "The travel restrictions service sent a response that could not be read."
                    .to_string()
            },
            Self::Timeout(after) => {
                format!("The travel restrictions lookup timed out after {after:?}.")
            },
            Self::Configuration(_) => {
                "The travel restrictions service is not configured correctly.".to_string()
            },
        }
    }
}

/// Truncate on a character boundary
fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
