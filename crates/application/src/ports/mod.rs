//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod travel_restrictions_port;

#[cfg(test)]
pub use travel_restrictions_port::MockTravelRestrictionsPort;
pub use travel_restrictions_port::{ProviderReply, ReplyBody, TravelRestrictionsPort};
