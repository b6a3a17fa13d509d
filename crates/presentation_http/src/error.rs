//! Page error handling
//!
//! Pipeline failures are shown to the user as a rendered error page with a
//! status code matching the failure kind. Template failures fall back to a
//! plain-text 500 so that a broken template can never hide the outage.

use application::FailureKind;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use infrastructure::TemplateError;
use thiserror::Error;
use tracing::error;

/// Body sent when no page could be rendered
const FALLBACK_BODY: &str = "Failed to load the page!";

/// HTTP status for a failed resolution
pub const fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Validation => StatusCode::BAD_REQUEST,
        FailureKind::Transport | FailureKind::Api | FailureKind::Decode => {
            StatusCode::BAD_GATEWAY
        },
        FailureKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
    }
}

/// Page error type
#[derive(Debug, Error)]
pub enum PageError {
    /// The lookup failed; `page` is the rendered error page
    #[error("Trip lookup failed with {status}")]
    Lookup { status: StatusCode, page: String },

    /// A page template could not be rendered
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Lookup { status, page } => (status, Html(page)).into_response(),
            Self::Template(e) => {
                error!(error = %e, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_BODY).into_response()
            },
        }
    }
}
