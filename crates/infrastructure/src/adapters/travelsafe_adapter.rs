//! Travelsafe adapter - Implements TravelRestrictionsPort using integration_travelsafe

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ProviderReply, ReplyBody, TravelRestrictionsPort};
use async_trait::async_trait;
use domain::{DomainError, TripRequest};
use integration_travelsafe::{
    BodyError, HttpTravelSafeClient, OutboundQuery, RawResponse, TravelSafeClient,
    TravelSafeConfig, TravelSafeError,
};
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use crate::config::TravelSafeAppConfig;

/// Adapter for the TravelPerk travelsafe restrictions API
pub struct TravelSafeAdapter {
    client: Arc<dyn TravelSafeClient>,
    config: TravelSafeConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for TravelSafeAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelSafeAdapter")
            .field("client", &"TravelSafeClient")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TravelSafeAdapter {
    /// Create an adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint configuration is invalid.
    pub fn new(config: &TravelSafeAppConfig) -> Result<Self, ApplicationError> {
        if !config.has_api_key() {
            warn!("No travelsafe API key configured; lookups will be rejected by the provider");
        }

        let client_config = config.to_travelsafe_config();
        let client = HttpTravelSafeClient::new(&client_config).map_err(Self::map_error)?;

        Ok(Self::with_client(
            Arc::new(client),
            client_config,
            config.api_key_or_empty(),
        ))
    }

    /// Create an adapter around an existing client
    pub fn with_client(
        client: Arc<dyn TravelSafeClient>,
        config: TravelSafeConfig,
        api_key: SecretString,
    ) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    /// Convert a client error into an application error
    fn map_error(error: TravelSafeError) -> ApplicationError {
        match error {
            TravelSafeError::InvalidQuery(msg) => DomainError::InvalidLocation(msg).into(),
            TravelSafeError::Network(msg) => ApplicationError::Transport(msg),
            TravelSafeError::Configuration(msg) => ApplicationError::Configuration(msg),
        }
    }

    /// Convert a raw response into an unclassified provider reply
    fn to_reply(response: RawResponse) -> ProviderReply {
        let body = match response.body {
            Ok(bytes) => ReplyBody::Bytes(bytes.to_vec()),
            Err(BodyError::Read(msg)) => ReplyBody::Unreadable(msg),
            Err(BodyError::TooLarge { limit }) => ReplyBody::TooLarge { limit },
        };

        ProviderReply {
            status: response.status.as_u16(),
            reason: response.status.canonical_reason().map(str::to_string),
            body,
        }
    }
}

#[async_trait]
impl TravelRestrictionsPort for TravelSafeAdapter {
    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    async fn fetch(&self, request: &TripRequest) -> Result<ProviderReply, ApplicationError> {
        let query = OutboundQuery::build(
            request.origin.as_str(),
            request.destination.as_str(),
            &self.config,
        )
        .map_err(Self::map_error)?;

        let response = self
            .client
            .fetch(&query, &self.api_key)
            .await
            .map_err(Self::map_error)?;

        debug!(status = %response.status_line(), "Travelsafe reply received");
        Ok(Self::to_reply(response))
    }
}
