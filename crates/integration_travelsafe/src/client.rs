//! Travelsafe HTTP transport
//!
//! Issues the single GET for a query and returns the status plus a bounded
//! copy of the body. No retries, no caching and no request timeout: the
//! caller owns the deadline and cancels by dropping the future.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::{
    Client, Response, StatusCode,
    header::{AUTHORIZATION, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::TravelSafeConfig;
use crate::error::TravelSafeError;
use crate::query::OutboundQuery;

/// Header carrying the travelsafe API version
const API_VERSION_HEADER: &str = "Api-Version";

/// Trait for travelsafe transport clients
#[async_trait]
pub trait TravelSafeClient: Send + Sync {
    /// Send the query and return the unclassified response
    ///
    /// Exactly one outbound request is made per call.
    async fn fetch(
        &self,
        query: &OutboundQuery,
        api_key: &SecretString,
    ) -> Result<RawResponse, TravelSafeError>;
}

/// Why a response body is not available
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    /// The connection failed while the body was streaming
    #[error("failed to read response body: {0}")]
    Read(String),

    /// The body is larger than the configured limit
    #[error("response body exceeds {limit} bytes")]
    TooLarge {
        /// Configured limit in bytes
        limit: usize,
    },
}

/// Status and body of a travelsafe response, before classification
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status returned by the provider
    pub status: StatusCode,
    /// Buffered body, or the reason it could not be buffered
    pub body: Result<Bytes, BodyError>,
}

impl RawResponse {
    /// Status code followed by its canonical reason, e.g. `503 Service Unavailable`
    pub fn status_line(&self) -> String {
        self.status.canonical_reason().map_or_else(
            || self.status.as_u16().to_string(),
            |reason| format!("{} {reason}", self.status.as_u16()),
        )
    }
}

/// Travelsafe client backed by `reqwest`
#[derive(Debug)]
pub struct HttpTravelSafeClient {
    client: Client,
    config: TravelSafeConfig,
}

impl HttpTravelSafeClient {
    /// Create a new travelsafe client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TravelSafeConfig) -> Result<Self, TravelSafeError> {
        config.validate().map_err(TravelSafeError::Configuration)?;

        let client = Client::builder()
            .user_agent(concat!("TripCheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelSafeError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the `Authorization` header value, flagged as sensitive
    fn authorization(api_key: &SecretString) -> Result<HeaderValue, TravelSafeError> {
        let mut value = HeaderValue::from_str(&format!("ApiKey {}", api_key.expose_secret()))
            .map_err(|_| {
                TravelSafeError::Configuration(
                    "API key contains characters not allowed in a header".to_string(),
                )
            })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Buffer the body, stopping as soon as it exceeds `limit`
    async fn read_limited(mut response: Response, limit: usize) -> Result<Bytes, BodyError> {
        let max = u64::try_from(limit).unwrap_or(u64::MAX);
        if response.content_length().is_some_and(|len| len > max) {
            return Err(BodyError::TooLarge { limit });
        }

        let mut buf = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| BodyError::Read(e.to_string()))?
        {
            if buf.len() + chunk.len() > limit {
                return Err(BodyError::TooLarge { limit });
            }
            buf.extend_from_slice(&chunk);
        }

        Ok(buf.freeze())
    }
}

#[async_trait]
impl TravelSafeClient for HttpTravelSafeClient {
    #[instrument(skip(self, query, api_key), fields(origin = %query.origin(), destination = %query.destination()))]
    async fn fetch(
        &self,
        query: &OutboundQuery,
        api_key: &SecretString,
    ) -> Result<RawResponse, TravelSafeError> {
        let authorization = Self::authorization(api_key)?;

        debug!(url = %query.url(), "Requesting travel restrictions");

        let response = self
            .client
            .get(query.url().clone())
            .header(API_VERSION_HEADER, self.config.api_version.as_str())
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| TravelSafeError::Network(e.to_string()))?;

        let status = response.status();
        let body = Self::read_limited(response, self.config.max_body_bytes).await;

        match &body {
            Ok(bytes) => debug!(%status, bytes = bytes.len(), "Travel restrictions response received"),
            Err(e) => warn!(%status, error = %e, "Travel restrictions body unavailable"),
        }

        Ok(RawResponse { status, body })
    }
}
