//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `travelsafe`: restrictions provider endpoint and API key
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, the legacy `ENTRYAPI`/`PORT` variables, and finally
//! `TRIPCHECK__`-prefixed variables such as `TRIPCHECK__SERVER__PORT`.

mod server;
mod travelsafe;

use config::{ConfigError, Map, Source, Value};
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;
pub use travelsafe::TravelSafeAppConfig;

use crate::templates::TemplateConfig;

/// Prefix of the structured environment variables
const ENV_PREFIX: &str = "TRIPCHECK";

/// Separator between prefix, section and key
const ENV_SEPARATOR: &str = "__";

/// Legacy variables holding the API key, in lookup order
const LEGACY_API_KEY_VARS: [&str; 2] = ["ENTRYAPI", "entryApi"];

/// Legacy variable holding the listen port
const LEGACY_PORT_VAR: &str = "PORT";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Travelsafe provider configuration
    #[serde(default)]
    pub travelsafe: TravelSafeAppConfig,

    /// Page template configuration
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and optional file
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Load configuration from an explicit set of variables instead of the
    /// process environment
    pub fn load_from(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::build(Some(vars))
    }

    fn build(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Legacy deployment variables (ENTRYAPI, PORT)
            .add_source(LegacyEnvironment { vars: vars.clone() })
            // Override with environment variables (e.g., TRIPCHECK__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(vars),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.travelsafe.validate()?;
        Ok(())
    }
}

/// Maps `ENTRYAPI` and `PORT` onto their structured keys
#[derive(Debug, Clone, Default)]
struct LegacyEnvironment {
    /// Variables to read instead of the process environment
    vars: Option<Map<String, String>>,
}

impl LegacyEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        let value = match &self.vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

impl Source for LegacyEnvironment {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let origin = "legacy environment".to_string();
        let mut map = Map::new();

        if let Some(key) = LEGACY_API_KEY_VARS
            .iter()
            .find_map(|name| self.lookup(name))
        {
            map.insert(
                "travelsafe.api_key".to_string(),
                Value::new(Some(&origin), key),
            );
        }

        if let Some(port) = self.lookup(LEGACY_PORT_VAR) {
            map.insert("server.port".to_string(), Value::new(Some(&origin), port));
        }

        Ok(map)
    }
}
