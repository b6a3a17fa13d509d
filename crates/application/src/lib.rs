//! Application layer - Trip requirements use case
//!
//! Classifies and decodes provider replies, projects them into the view
//! model handed to the renderer, and orchestrates one resolution per request.
//! The provider itself is reached through [`ports::TravelRestrictionsPort`].

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
