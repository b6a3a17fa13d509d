//! Response classification
//!
//! Splits provider replies into a body to decode or a typed failure. Every
//! status from 400 up is a failure; client and server errors are treated the
//! same and nothing is retried.

use crate::error::ApplicationError;
use crate::ports::{ProviderReply, ReplyBody};

/// First status code treated as a failure
const FIRST_ERROR_STATUS: u16 = 400;

/// Classify a provider reply
///
/// On success the body bytes are returned untouched.
///
/// # Errors
///
/// - [`ApplicationError::Provider`] for statuses of 400 and above, carrying the
///   body when it was readable
/// - [`ApplicationError::Transport`] when a success body could not be read
/// - [`ApplicationError::Decode`] when a success body exceeded the size limit
pub fn classify(reply: ProviderReply) -> Result<Vec<u8>, ApplicationError> {
    if reply.status >= FIRST_ERROR_STATUS {
        let body = match reply.body {
            ReplyBody::Bytes(bytes) => {
                let text = String::from_utf8_lossy(&bytes).trim().to_string();
                (!text.is_empty()).then_some(text)
            },
            ReplyBody::Unreadable(_) | ReplyBody::TooLarge { .. } => None,
        };
        return Err(ApplicationError::Provider {
            status: reply.status,
            reason: reply.reason,
            body,
        });
    }

    match reply.body {
        ReplyBody::Bytes(bytes) => Ok(bytes),
        ReplyBody::Unreadable(reason) => Err(ApplicationError::Transport(reason)),
        ReplyBody::TooLarge { limit } => Err(ApplicationError::Decode(format!(
            "response body exceeds {limit} bytes"
        ))),
    }
}
