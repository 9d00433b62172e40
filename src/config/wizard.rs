//! Wizard behavior configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Autocomplete tuning and session lifetime
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WizardConfig {
    /// Quiet window before a suggestion search is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Shortest trimmed input that triggers a search
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Sessions untouched for this long are dropped
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl WizardConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(50..=5000).contains(&self.debounce_ms) {
            return Err(ValidationError::InvalidDebounce);
        }
        if !(1..=20).contains(&self.min_query_length) {
            return Err(ValidationError::InvalidMinQueryLength);
        }
        if !(60..=86_400).contains(&self.idle_timeout_secs) {
            return Err(ValidationError::InvalidIdleTimeout);
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_length: default_min_query_length(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_length() -> usize {
    3
}

fn default_idle_timeout_secs() -> u64 {
    1800
}
