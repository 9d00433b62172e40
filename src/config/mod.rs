//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAMPAIGN_BRIEF` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use campaign_brief::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod brandfetch;
mod documents;
mod error;
mod server;
mod wizard;

pub use brandfetch::BrandfetchConfig;
pub use documents::DocumentsConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use wizard::WizardConfig;

use serde::Deserialize;

use crate::application::WizardSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Brand lookup service
    #[serde(default)]
    pub brandfetch: BrandfetchConfig,

    /// Document generation service
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// Autocomplete tuning
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAMPAIGN_BRIEF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAMPAIGN_BRIEF__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CAMPAIGN_BRIEF__BRANDFETCH__API_KEY=...` -> `brandfetch.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing credentials are reported by [`validate`](Self::validate).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAMPAIGN_BRIEF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value: missing
    /// credentials, bad URLs, plain HTTP in production or out-of-range
    /// tuning values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.brandfetch.validate(&self.server.environment)?;
        self.documents.validate(&self.server.environment)?;
        self.wizard.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Settings shared by every wizard session.
    pub fn wizard_settings(&self) -> WizardSettings {
        WizardSettings {
            debounce_window: self.wizard.debounce_window(),
            min_query_length: self.wizard.min_query_length,
            idle_timeout: self.wizard.idle_timeout(),
            template_id: self.documents.template_id.clone(),
            folder_name: self.documents.folder_name.clone(),
        }
    }
}
