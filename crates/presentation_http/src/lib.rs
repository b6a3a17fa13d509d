//! TripCheck HTTP presentation layer
//!
//! Serves the search form, the trip requirements page and a health endpoint.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{PageError, status_for};
pub use routes::create_router;
pub use state::AppState;
