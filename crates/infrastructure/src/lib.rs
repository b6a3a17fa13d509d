//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports and provides configuration loading,
//! HTML page rendering and log setup for the server binary.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::TravelSafeAdapter;
pub use config::{AppConfig, ServerConfig, TravelSafeAppConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
pub use templates::{PageRenderer, TemplateConfig, TemplateError};
