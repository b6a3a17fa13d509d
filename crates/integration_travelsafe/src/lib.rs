//! TravelPerk travelsafe integration for TripCheck
//!
//! Talks to the travelsafe restrictions endpoint, which reports entry
//! requirements for an origin/destination country pair.
//!
//! # Architecture
//!
//! [`OutboundQuery`] validates and percent-encodes the user's input into the
//! request URL. [`TravelSafeClient`] defines the transport interface and is
//! implemented by [`HttpTravelSafeClient`], which performs exactly one GET per
//! call and hands back a [`RawResponse`] without interpreting the status code.
//! Classification and decoding of the body happen in the application layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_travelsafe::{HttpTravelSafeClient, OutboundQuery, TravelSafeClient, TravelSafeConfig};
//! use secrecy::SecretString;
//!
//! let config = TravelSafeConfig::default();
//! let client = HttpTravelSafeClient::new(&config)?;
//! let query = OutboundQuery::build("US", "FR", &config)?;
//!
//! let response = client.fetch(&query, &SecretString::from("my-key".to_string())).await?;
//! println!("{}", response.status_line());
//! ```

mod client;
mod config;
mod error;
mod query;

pub use client::{BodyError, HttpTravelSafeClient, RawResponse, TravelSafeClient};
pub use config::TravelSafeConfig;
pub use error::TravelSafeError;
pub use query::{LOCATION_TYPE, OutboundQuery};
