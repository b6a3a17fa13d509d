//! Value Objects - Immutable, identity-less domain primitives

mod location_code;

pub use location_code::LocationCode;
