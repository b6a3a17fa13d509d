//! Domain entities

mod trip_info;
mod trip_request;

pub use trip_info::{Category, Document, Place, RequirementEntry, TripInfo};
pub use trip_request::TripRequest;
