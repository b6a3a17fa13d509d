//! Outbound query construction
//!
//! Turns the two user-supplied location strings into the restrictions URL.
//! Values are form-urlencoded exactly once, so input that already contains
//! escape sequences is encoded again rather than trusted.

use url::Url;

use crate::config::TravelSafeConfig;
use crate::error::TravelSafeError;

/// Location type sent for both origin and destination
pub const LOCATION_TYPE: &str = "country_code";

/// A fully built restrictions query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundQuery {
    origin: String,
    destination: String,
    url: Url,
}

impl OutboundQuery {
    /// Build the query for an origin/destination pair
    ///
    /// Both values are trimmed before encoding. The date parameter always
    /// comes from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TravelSafeError::InvalidQuery`] if either value is blank and
    /// [`TravelSafeError::Configuration`] if the base URL cannot be parsed.
    pub fn build(
        origin: &str,
        destination: &str,
        config: &TravelSafeConfig,
    ) -> Result<Self, TravelSafeError> {
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(TravelSafeError::InvalidQuery(
                "origin must not be empty".to_string(),
            ));
        }

        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TravelSafeError::InvalidQuery(
                "destination must not be empty".to_string(),
            ));
        }

        let mut url = Url::parse(&config.base_url).map_err(|e| {
            TravelSafeError::Configuration(format!("invalid base_url {}: {e}", config.base_url))
        })?;

        url.query_pairs_mut()
            .append_pair("destination", destination)
            .append_pair("destination_type", LOCATION_TYPE)
            .append_pair("origin", origin)
            .append_pair("origin_type", LOCATION_TYPE)
            .append_pair("date", &config.query_date);

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            url,
        })
    }

    /// Trimmed origin as supplied by the user
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Trimmed destination as supplied by the user
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Complete request URL
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Encoded query string without the leading `?`
    pub fn query_string(&self) -> &str {
        self.url.query().unwrap_or_default()
    }
}
