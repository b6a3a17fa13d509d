//! Domain layer for TripCheck
//!
//! Contains the trip request, the decoded trip requirements snapshot, and
//! domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
