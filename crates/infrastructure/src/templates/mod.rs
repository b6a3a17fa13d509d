//! Page rendering for the trip search UI
//!
//! Uses the Tera templating engine with templates embedded at compile time.
//! Rendering is a pure function of the view model: no lookups, no helpers
//! registered into the engine.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::PageRenderer;
//!
//! let renderer = PageRenderer::new()?;
//! let html = renderer.render_error("Please enter the origin country code.")?;
//! ```

mod embedded;

use std::sync::Arc;

use application::TripView;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Template names
const LAYOUT_TEMPLATE: &str = "layout.html";
const ENTRY_TEMPLATE: &str = "entry.html";
const RESULT_TEMPLATE: &str = "result.html";
const ERROR_TEMPLATE: &str = "error.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(error_chain(&e)),
        }
    }
}

/// Tera wraps the useful detail in its source chain
fn error_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Page template configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Whether to auto-escape HTML
    #[serde(default = "default_true")]
    pub auto_escape: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self { auto_escape: true }
    }
}

/// Renders the entry form, result and error pages
#[derive(Clone)]
pub struct PageRenderer {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PageRenderer {
    /// Create a renderer with default configuration
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        tera.autoescape_on(if config.auto_escape {
            vec![".html"]
        } else {
            vec![]
        });

        // Added together so `extends` resolves regardless of order
        tera.add_raw_templates(vec![
            (LAYOUT_TEMPLATE, embedded::LAYOUT),
            (ENTRY_TEMPLATE, embedded::ENTRY),
            (RESULT_TEMPLATE, embedded::RESULT),
            (ERROR_TEMPLATE, embedded::ERROR),
        ])
        .map_err(|e| TemplateError::Compile(error_chain(&e)))?;

        debug!(auto_escape = config.auto_escape, "Page templates compiled");

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, context)
            .map_err(TemplateError::from)
    }

    /// Render the empty search form
    pub fn render_entry_form(&self) -> Result<String, TemplateError> {
        self.render(ENTRY_TEMPLATE, &Context::new())
    }

    /// Render the requirements for a resolved trip
    pub fn render_result(&self, trip: &TripView) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("trip", trip);
        self.render(RESULT_TEMPLATE, &ctx)
    }

    /// Render a failure message
    pub fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("message", message);
        self.render(ERROR_TEMPLATE, &ctx)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}
