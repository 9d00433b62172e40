//! DTOs for the brand lookup proxy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsParams {
    pub domain: Option<String>,
}

/// Error body of the proxy endpoints: a single `error` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyErrorResponse {
    pub error: String,
}

impl ProxyErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
