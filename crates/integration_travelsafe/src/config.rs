//! Travelsafe client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the travelsafe restrictions endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelSafeConfig {
    /// Full URL of the restrictions endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent in the `Api-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Date sent with every query
    ///
    /// The sandbox only serves data for this date, so it is fixed per process
    /// rather than derived from the request.
    #[serde(default = "default_query_date")]
    pub query_date: String,

    /// Largest response body that will be buffered, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_base_url() -> String {
    "https://sandbox.travelperk.com/travelsafe/restrictions".to_string()
}

fn default_api_version() -> String {
    "1".to_string()
}

fn default_query_date() -> String {
    "2020-10-15".to_string()
}

const fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1MB
}

impl Default for TravelSafeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            query_date: default_query_date(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl TravelSafeConfig {
    /// Create a configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_body_bytes: 64 * 1024,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }

        if self.api_version.trim().is_empty() {
            return Err("api_version must not be empty".to_string());
        }

        if self.query_date.trim().is_empty() {
            return Err("query_date must not be empty".to_string());
        }

        if self.max_body_bytes == 0 {
            return Err("max_body_bytes must be greater than 0".to_string());
        }

        Ok(())
    }
}
