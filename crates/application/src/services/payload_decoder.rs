//! Payload decoding

use domain::TripInfo;
use tracing::warn;

use crate::error::ApplicationError;

/// Decode a provider body into a [`TripInfo`]
///
/// Unknown keys are ignored and missing or `null` values become empty. The
/// parse detail is logged and kept in the error, but never shown to users.
///
/// # Errors
///
/// Returns [`ApplicationError::Decode`] if the body is not JSON or a field
/// has the wrong primitive type.
pub fn decode(body: &[u8]) -> Result<TripInfo, ApplicationError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, bytes = body.len(), "Failed to decode travel restrictions payload");
        ApplicationError::Decode(e.to_string())
    })
}
