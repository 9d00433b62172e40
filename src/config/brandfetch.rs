//! Brand lookup (Brandfetch) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Brandfetch API configuration
#[derive(Debug, Deserialize)]
pub struct BrandfetchConfig {
    /// API key sent as a bearer token
    pub api_key: Option<Secret<String>>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl BrandfetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate Brandfetch configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("BRANDFETCH__API_KEY"));
        }
        validate_url("BRANDFETCH__BASE_URL", &self.base_url, environment)?;
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for BrandfetchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Checks scheme, and HTTPS in production.
pub(super) fn validate_url(
    name: &'static str,
    url: &str,
    environment: &Environment,
) -> Result<(), ValidationError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ValidationError::InvalidUrl(name));
    }
    if *environment == Environment::Production && !url.starts_with("https://") {
        return Err(ValidationError::UrlMustBeHttps(name));
    }
    Ok(())
}

fn default_base_url() -> String {
    "https://api.brandfetch.io/v2".to_string()
}

fn default_timeout() -> u64 {
    10
}
