//! Location code value object
//!
//! A free-form country or location code as typed by the user (for example
//! `US` or `FR`). The only guarantee is that it is non-empty after trimming.
//!
//! # Examples
//!
//! ```
//! use domain::LocationCode;
//!
//! let code = LocationCode::new("  FR ").unwrap();
//! assert_eq!(code.as_str(), "FR");
//!
//! assert!(LocationCode::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated, trimmed location code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode {
    #[validate(length(min = 1))]
    value: String,
}

impl LocationCode {
    /// Create a location code, trimming surrounding whitespace
    ///
    /// Case is preserved: the provider decides how to interpret the code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty after trimming.
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: code.as_ref().trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|_| DomainError::InvalidLocation("must not be empty".to_string()))?;

        Ok(candidate)
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for LocationCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationCode> for String {
    fn from(code: LocationCode) -> Self {
        code.value
    }
}

impl AsRef<str> for LocationCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_code_is_accepted() {
        let code = LocationCode::new("US").unwrap();
        assert_eq!(code.as_str(), "US");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let code = LocationCode::new("\t de \n").unwrap();
        assert_eq!(code.as_str(), "de");
    }

    #[test]
    fn case_is_preserved() {
        let code = LocationCode::new("gB").unwrap();
        assert_eq!(code.to_string(), "gB");
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(LocationCode::new("").is_err());
    }

    #[test]
    fn whitespace_only_code_is_rejected() {
        let err = LocationCode::new(" \t ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidLocation(_)));
    }

    #[test]
    fn try_from_string() {
        let code = LocationCode::try_from("FR".to_string()).unwrap();
        assert_eq!(code.as_ref(), "FR");
    }

    #[test]
    fn serializes_transparently() {
        let code = LocationCode::new("ES").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""ES""#);
    }

    #[test]
    fn deserializing_trims_the_code() {
        let code: LocationCode = serde_json::from_str(r#"" PT ""#).unwrap();
        assert_eq!(code.as_str(), "PT");
    }

    #[test]
    fn deserializing_blank_code_fails() {
        assert!(serde_json::from_str::<LocationCode>(r#""   ""#).is_err());
    }
}
