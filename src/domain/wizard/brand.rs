//! Brand value objects: autocomplete suggestions and resolved profiles.
//!
//! Both are replaced wholesale on every fetch and never mutated in place.

use serde::{Deserialize, Serialize};

/// One autocomplete candidate for the company website field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub domain: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Suggestion {
    /// Builds a suggestion; the display name falls back to the domain.
    pub fn new(domain: impl Into<String>, name: Option<String>, icon_url: Option<String>) -> Self {
        let domain = domain.into();
        let display_name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| domain.clone());
        Self {
            domain,
            display_name,
            icon_url,
        }
    }
}

/// A single rendition of a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoFormat {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A logo variant (e.g. light or dark theme) with its renditions in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoCandidate {
    pub theme: Option<String>,
    pub formats: Vec<LogoFormat>,
}

/// Brand metadata fetched for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    domain: String,
    name: String,
    description: String,
    logo_candidates: Vec<LogoCandidate>,
}

impl BrandProfile {
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        logo_candidates: Vec<LogoCandidate>,
    ) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            description: description.into(),
            logo_candidates,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn logo_candidates(&self) -> &[LogoCandidate] {
        &self.logo_candidates
    }

    /// URL of the first rendition of the first logo that has one.
    pub fn preferred_logo_url(&self) -> Option<&str> {
        self.logo_candidates
            .iter()
            .flat_map(|candidate| candidate.formats.iter())
            .map(|format| format.url.as_str())
            .find(|url| !url.is_empty())
    }
}
