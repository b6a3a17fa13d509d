//! Trip request entity
//!
//! One `TripRequest` is created per form submission and dropped once the
//! result page is rendered. It is never stored in shared state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;
use crate::value_objects::LocationCode;

/// A validated origin/destination pair submitted by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Identifier used to correlate log lines for this request
    pub request_id: Uuid,
    /// Where the traveller departs from
    pub origin: LocationCode,
    /// Where the traveller is going
    pub destination: LocationCode,
    /// When the request was received
    pub requested_at: DateTime<Utc>,
}

impl TripRequest {
    /// Validate raw form input into a trip request
    ///
    /// The origin is checked first, so a request with both fields empty
    /// reports the origin.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] naming the first field that is
    /// empty after trimming.
    pub fn new(origin: &str, destination: &str) -> Result<Self, DomainError> {
        let origin =
            LocationCode::new(origin).map_err(|_| DomainError::missing_field("origin"))?;
        let destination = LocationCode::new(destination)
            .map_err(|_| DomainError::missing_field("destination"))?;

        Ok(Self {
            request_id: Uuid::now_v7(),
            origin,
            destination,
            requested_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_valid_input() {
        let request = TripRequest::new("US", "FR").unwrap();
        assert_eq!(request.origin.as_str(), "US");
        assert_eq!(request.destination.as_str(), "FR");
        assert!(!request.request_id.is_nil());
    }

    #[test]
    fn trims_both_fields() {
        let request = TripRequest::new(" US ", "  FR").unwrap();
        assert_eq!(request.origin.as_str(), "US");
        assert_eq!(request.destination.as_str(), "FR");
    }

    #[test]
    fn empty_origin_is_reported() {
        let err = TripRequest::new("", "FR").unwrap_err();
        assert!(matches!(err, DomainError::MissingField(ref f) if f == "origin"));
    }

    #[test]
    fn blank_destination_is_reported() {
        let err = TripRequest::new("US", "   ").unwrap_err();
        assert!(matches!(err, DomainError::MissingField(ref f) if f == "destination"));
    }

    #[test]
    fn origin_is_reported_before_destination() {
        let err = TripRequest::new(" ", "").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: origin");
    }

    #[test]
    fn each_request_gets_its_own_id() {
        let a = TripRequest::new("US", "FR").unwrap();
        let b = TripRequest::new("US", "FR").unwrap();
        assert_ne!(a.request_id, b.request_id);
    }
}
