//! Travelsafe provider configuration.

use integration_travelsafe::TravelSafeConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Travelsafe restrictions provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TravelSafeAppConfig {
    /// Full URL of the restrictions endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Api-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Date sent with every query
    #[serde(default = "default_query_date")]
    pub query_date: String,

    /// Largest response body that will be buffered, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for TravelSafeAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelSafeAppConfig")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("query_date", &self.query_date)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

fn default_base_url() -> String {
    TravelSafeConfig::default().base_url
}

fn default_api_version() -> String {
    TravelSafeConfig::default().api_version
}

fn default_query_date() -> String {
    TravelSafeConfig::default().query_date
}

fn default_max_body_bytes() -> usize {
    TravelSafeConfig::default().max_body_bytes
}

impl Default for TravelSafeAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            query_date: default_query_date(),
            max_body_bytes: default_max_body_bytes(),
            api_key: None,
        }
    }
}

impl TravelSafeAppConfig {
    /// Convert to `integration_travelsafe::TravelSafeConfig`
    #[must_use]
    pub fn to_travelsafe_config(&self) -> TravelSafeConfig {
        TravelSafeConfig {
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            query_date: self.query_date.clone(),
            max_body_bytes: self.max_body_bytes,
        }
    }

    /// Whether a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// API key, or an empty secret when none is configured
    pub fn api_key_or_empty(&self) -> SecretString {
        self.api_key
            .clone()
            .unwrap_or_else(|| SecretString::from(String::new()))
    }

    /// Validate the configuration
    ///
    /// A missing API key is not an error here: the provider rejects the call
    /// and the failure is reported per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint settings are invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.to_travelsafe_config()
            .validate()
            .map_err(|e| format!("travelsafe: {e}"))
    }
}
