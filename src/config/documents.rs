//! Document service configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::brandfetch::validate_url;
use super::error::ValidationError;
use super::server::Environment;

/// Document generation service configuration
#[derive(Debug, Deserialize)]
pub struct DocumentsConfig {
    /// Base URL; documents are created with `POST {base_url}/documents`
    pub base_url: Option<String>,

    /// Credential sent as a bearer token
    pub api_key: Option<Secret<String>>,

    /// Template document cloned for every brief
    #[serde(default)]
    pub template_id: String,

    /// Folder the generated briefs are placed in
    #[serde(default = "default_folder_name")]
    pub folder_name: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl DocumentsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    /// Validate document service configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let base_url = self
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ValidationError::MissingRequired("DOCUMENTS__BASE_URL"))?;
        validate_url("DOCUMENTS__BASE_URL", base_url, environment)?;

        if self.api_key().is_none() {
            return Err(ValidationError::MissingRequired("DOCUMENTS__API_KEY"));
        }
        if self.template_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DOCUMENTS__TEMPLATE_ID"));
        }
        if self.folder_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DOCUMENTS__FOLDER_NAME"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            template_id: String::new(),
            folder_name: default_folder_name(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_folder_name() -> String {
    "Campaign Briefs".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DocumentsConfig {
        DocumentsConfig {
            base_url: Some("https://docs.internal".to_string()),
            api_key: Some(Secret::new("doc-key".to_string())),
            template_id: "tpl-1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = DocumentsConfig::default();
        assert_eq!(config.folder_name, "Campaign Briefs");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_missing_base_url() {
        let config = DocumentsConfig {
            base_url: None,
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("DOCUMENTS__BASE_URL"))
        );
    }

    #[test]
    fn test_missing_credential() {
        let config = DocumentsConfig {
            api_key: None,
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("DOCUMENTS__API_KEY"))
        );
    }

    #[test]
    fn test_missing_template() {
        let config = DocumentsConfig {
            template_id: " ".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("DOCUMENTS__TEMPLATE_ID"))
        );
    }
}
