//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required form field was empty or whitespace-only
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Location code failed validation
    #[error("Invalid location code: {0}")]
    InvalidLocation(String),
}

impl DomainError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_error_message() {
        let err = DomainError::missing_field("origin");
        assert_eq!(err.to_string(), "Missing required field: origin");
    }

    #[test]
    fn invalid_location_error_message() {
        let err = DomainError::InvalidLocation("must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid location code: must not be empty");
    }
}
