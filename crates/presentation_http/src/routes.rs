//! Route definitions

use axum::{Router, routing::get};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, state::AppState};

/// Largest accepted form body
const MAX_FORM_BYTES: usize = 16 * 1024;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::trip::entry_form))
        .route(
            "/searchEntry",
            get(handlers::trip::search_query).post(handlers::trip::search_form),
        )
        // Health
        .route("/health", get(handlers::health::health_check))
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BYTES))
        // Attach state
        .with_state(state)
}
