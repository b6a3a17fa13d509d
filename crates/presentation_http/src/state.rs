//! Application state shared across handlers

use std::sync::Arc;

use application::TripRequirementsService;
use infrastructure::PageRenderer;

/// Shared application state
///
/// Holds only immutable services; every request gets its own pipeline run.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Resolves trip requirements
    pub service: Arc<TripRequirementsService>,
    /// Renders HTML pages
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(service: TripRequirementsService, renderer: PageRenderer) -> Self {
        Self {
            service: Arc::new(service),
            renderer: Arc::new(renderer),
        }
    }
}
