//! Brand Lookup Port - Interface for the third-party brand directory.
//!
//! Two narrow calls: a free-text search used for autocomplete, and a
//! detail lookup by domain used to pre-fill the brand review step.
//!
//! The wire types here mirror what the directory returns, not the domain
//! value objects. Application handlers normalize them into
//! [`Suggestion`](crate::domain::wizard::Suggestion) and
//! [`BrandProfile`](crate::domain::wizard::BrandProfile).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for brand search and detail lookup.
///
/// # Contract
///
/// Implementations must:
/// - Return search hits in the order the directory ranked them
/// - Report non-2xx answers as `Status` and transport problems as `Network`
/// - Report bodies that do not match the expected shape as `Malformed`
#[async_trait]
pub trait BrandLookup: Send + Sync {
    /// Searches brands matching free text.
    async fn search(&self, query: &str) -> Result<Vec<BrandSearchHit>, BrandLookupError>;

    /// Fetches full brand metadata for a domain.
    async fn details(&self, domain: &str) -> Result<BrandDetails, BrandLookupError>;
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSearchHit {
    pub domain: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Brand metadata for a single domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logos: Vec<BrandLogo>,
}

/// A logo variant as returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandLogo {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub formats: Vec<BrandLogoFormat>,
}

/// One downloadable rendition of a logo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandLogoFormat {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Errors from the brand directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandLookupError {
    /// The directory answered with a non-success status.
    #[error("brand directory returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The adapter is not configured to make calls.
    #[error("brand lookup not configured: {0}")]
    NotConfigured(String),
}

impl BrandLookupError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        BrandLookupError::Status {
            status,
            message: message.into(),
        }
    }
}
