//! Trip requirements resolution
//!
//! Runs one submission through validation, the provider call, classification,
//! decoding and projection. Each call to [`TripRequirementsService::resolve`]
//! owns its own state; nothing about a trip outlives the call.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::TripRequest;
use serde::Serialize;
use thiserror::Error;
use tokio::time::{Instant, timeout_at};
use tracing::{Span, debug, info, instrument, warn};

use super::{TripView, classify, decode, project};
use crate::error::ApplicationError;
use crate::ports::TravelRestrictionsPort;

/// Default wall-clock ceiling for one resolution
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Stage of a single resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Idle,
    Validating,
    Fetching,
    Classifying,
    Decoding,
    Projecting,
    Done,
    Failed(FailureKind),
}

impl PipelineStage {
    /// Whether `next` is a legal successor of this stage
    ///
    /// Stages only move forward, and only the four fallible stages may fail.
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Validating)
                | (Self::Validating, Self::Fetching)
                | (Self::Fetching, Self::Classifying)
                | (Self::Classifying, Self::Decoding)
                | (Self::Decoding, Self::Projecting)
                | (Self::Projecting, Self::Done)
                | (
                    Self::Validating | Self::Fetching | Self::Classifying | Self::Decoding,
                    Self::Failed(_)
                )
        )
    }

    /// `Done` and `Failed` end a resolution
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Fetching => write!(f, "fetching"),
            Self::Classifying => write!(f, "classifying"),
            Self::Decoding => write!(f, "decoding"),
            Self::Projecting => write!(f, "projecting"),
            Self::Done => write!(f, "done"),
            Self::Failed(kind) => write!(f, "failed({kind})"),
        }
    }
}

/// Category of a failed resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Empty or invalid form input; no provider call was made
    Validation,
    /// The provider could not be reached
    Transport,
    /// The provider answered with an error status
    Api,
    /// The provider payload could not be decoded
    Decode,
    /// The request ceiling elapsed
    Timeout,
}

impl FailureKind {
    /// Classify an application error
    pub const fn of(error: &ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(_) => Self::Validation,
            ApplicationError::Transport(_) | ApplicationError::Configuration(_) => {
                Self::Transport
            },
            ApplicationError::Provider { .. } => Self::Api,
            ApplicationError::Decode(_) => Self::Decode,
            ApplicationError::Timeout(_) => Self::Timeout,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Transport => write!(f, "transport"),
            Self::Api => write!(f, "api"),
            Self::Decode => write!(f, "decode"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// Terminal failure of a resolution
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PipelineFailure {
    /// What went wrong
    pub kind: FailureKind,
    /// Stage that was running when the failure occurred
    pub stage: PipelineStage,
    /// Message for the rendering layer
    pub message: String,
    /// Underlying error, for logging
    #[source]
    pub source: ApplicationError,
}

/// Stage tracker for one resolution
#[derive(Debug)]
struct PipelineRun {
    stage: PipelineStage,
}

impl PipelineRun {
    const fn new() -> Self {
        Self {
            stage: PipelineStage::Idle,
        }
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "illegal pipeline transition {} -> {next}",
            self.stage
        );
        debug!(from = %self.stage, to = %next, "Pipeline transition");
        self.stage = next;
    }

    fn fail(&mut self, error: ApplicationError) -> PipelineFailure {
        let kind = FailureKind::of(&error);
        let stage = self.stage;
        self.advance(PipelineStage::Failed(kind));
        warn!(%stage, %kind, error = %error, "Trip requirements resolution failed");

        PipelineFailure {
            kind,
            stage,
            message: error.user_message(),
            source: error,
        }
    }
}

/// Resolves trip requirements for one submission at a time
pub struct TripRequirementsService {
    port: Arc<dyn TravelRestrictionsPort>,
    timeout: Duration,
}

impl fmt::Debug for TripRequirementsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripRequirementsService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TripRequirementsService {
    /// Create a service with the default five second ceiling
    pub fn new(port: Arc<dyn TravelRestrictionsPort>) -> Self {
        Self::with_timeout(port, DEFAULT_TIMEOUT)
    }

    /// Create a service with a custom ceiling
    pub fn with_timeout(port: Arc<dyn TravelRestrictionsPort>, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    /// Configured ceiling for one resolution
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve the requirements for an origin/destination pair
    ///
    /// Makes at most one provider call and never retries. The ceiling covers
    /// the whole resolution; when it elapses the in-flight call is dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineFailure`] describing the first stage that failed.
    #[instrument(skip(self), fields(request_id = tracing::field::Empty))]
    pub async fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TripView, PipelineFailure> {
        let deadline = Instant::now() + self.timeout;
        let mut run = PipelineRun::new();

        run.advance(PipelineStage::Validating);
        let request = TripRequest::new(origin, destination).map_err(|e| run.fail(e.into()))?;
        Span::current().record("request_id", tracing::field::display(request.request_id));

        run.advance(PipelineStage::Fetching);
        let reply = match timeout_at(deadline, self.port.fetch(&request)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => return Err(run.fail(e)),
            Err(_) => return Err(run.fail(ApplicationError::Timeout(self.timeout))),
        };

        run.advance(PipelineStage::Classifying);
        let body = classify(reply).map_err(|e| run.fail(e))?;

        run.advance(PipelineStage::Decoding);
        let trip_info = decode(&body).map_err(|e| run.fail(e))?;

        run.advance(PipelineStage::Projecting);
        let view = project(&trip_info);

        run.advance(PipelineStage::Done);
        info!(
            origin = %request.origin,
            destination = %request.destination,
            status = %view.status_label,
            requirements = view.requirements.len(),
            documents = trip_info.document_count(),
            "Trip requirements resolved"
        );

        Ok(view)
    }
}
