//! Brandfetch client - Implementation of BrandLookup over the Brandfetch v2 API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = BrandfetchConfig::new(api_key)
//!     .with_base_url("https://api.brandfetch.io/v2")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let lookup = BrandfetchClient::new(config)?;
//! let hits = lookup.search("acme").await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::ports::{
    BrandDetails, BrandLogo, BrandLogoFormat, BrandLookup, BrandLookupError, BrandSearchHit,
};

pub const DEFAULT_BASE_URL: &str = "https://api.brandfetch.io/v2";

/// Configuration for the Brandfetch client.
#[derive(Debug, Clone)]
pub struct BrandfetchConfig {
    api_key: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl BrandfetchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Brandfetch API client.
pub struct BrandfetchClient {
    config: BrandfetchConfig,
    client: Client,
}

impl BrandfetchClient {
    pub fn new(config: BrandfetchConfig) -> Result<Self, BrandLookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BrandLookupError::NotConfigured(format!("http client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds `{base}/{resource}/{value}` with `value` percent-encoded as a
    /// single path segment.
    fn endpoint(&self, resource: &str, value: &str) -> Result<Url, BrandLookupError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            BrandLookupError::NotConfigured(format!("invalid base url {}: {}", self.config.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                BrandLookupError::NotConfigured(format!(
                    "base url cannot carry a path: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .push(resource)
            .push(value);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<String, BrandLookupError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(self.config.api_key())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BrandLookupError::Network(format!(
                        "timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    BrandLookupError::Network(format!("connection failed: {}", e))
                } else {
                    BrandLookupError::Network(e.to_string())
                }
            })?;

        Self::read_body(response).await
    }

    async fn read_body(response: Response) -> Result<String, BrandLookupError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BrandLookupError::Network(format!("failed to read body: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Brandfetch request failed");
            return Err(BrandLookupError::status(status.as_u16(), body));
        }
        Ok(body)
    }
}

#[async_trait]
impl BrandLookup for BrandfetchClient {
    async fn search(&self, query: &str) -> Result<Vec<BrandSearchHit>, BrandLookupError> {
        let url = self.endpoint("search", query)?;
        tracing::debug!(query, "searching Brandfetch");

        let body = self.get(url).await?;
        // Search hits already match the port type field for field.
        serde_json::from_str(&body)
            .map_err(|e| BrandLookupError::Malformed(format!("search results: {}", e)))
    }

    async fn details(&self, domain: &str) -> Result<BrandDetails, BrandLookupError> {
        let url = self.endpoint("brands", domain)?;
        tracing::debug!(domain, "fetching Brandfetch brand");

        let body = self.get(url).await?;
        let brand: BrandWire = serde_json::from_str(&body)
            .map_err(|e| BrandLookupError::Malformed(format!("brand details: {}", e)))?;

        Ok(brand.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Brandfetch wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrandWire {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    long_description: Option<String>,
    #[serde(default)]
    logos: Vec<LogoWire>,
}

#[derive(Debug, Deserialize)]
struct LogoWire {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    formats: Vec<LogoFormatWire>,
}

#[derive(Debug, Deserialize)]
struct LogoFormatWire {
    #[serde(default)]
    src: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    format: Option<String>,
}

impl From<BrandWire> for BrandDetails {
    fn from(brand: BrandWire) -> Self {
        let description = brand
            .description
            .filter(|d| !d.trim().is_empty())
            .or(brand.long_description);
        BrandDetails {
            name: brand.name,
            description,
            logos: brand
                .logos
                .into_iter()
                .map(|logo| BrandLogo {
                    theme: logo.theme,
                    formats: logo
                        .formats
                        .into_iter()
                        .map(|f| BrandLogoFormat {
                            src: f.src,
                            width: f.width,
                            height: f.height,
                            format: f.format,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
