//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod travelsafe_adapter;

pub use travelsafe_adapter::TravelSafeAdapter;
