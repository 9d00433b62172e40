//! Mock brand lookup for testing.
//!
//! Answers are configured per query or domain. Unconfigured searches
//! return no hits; unconfigured detail lookups answer 404. Per-key
//! delays make it possible to reorder completions in race tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::ports::{
    BrandDetails, BrandLogo, BrandLogoFormat, BrandLookup, BrandLookupError, BrandSearchHit,
};

#[derive(Debug, Default)]
struct MockState {
    searches: HashMap<String, Result<Vec<BrandSearchHit>, BrandLookupError>>,
    details: HashMap<String, Result<BrandDetails, BrandLookupError>>,
    delays: HashMap<String, Duration>,
    search_calls: Vec<String>,
    detail_calls: Vec<String>,
}

/// In-memory [`BrandLookup`] with call recording.
#[derive(Debug, Clone, Default)]
pub struct MockBrandLookup {
    state: Arc<Mutex<MockState>>,
}

impl MockBrandLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, query: impl Into<String>, hits: Vec<BrandSearchHit>) -> Self {
        self.lock().searches.insert(query.into(), Ok(hits));
        self
    }

    pub fn with_search_error(self, query: impl Into<String>, error: BrandLookupError) -> Self {
        self.lock().searches.insert(query.into(), Err(error));
        self
    }

    pub fn with_details(self, domain: impl Into<String>, details: BrandDetails) -> Self {
        self.lock().details.insert(domain.into(), Ok(details));
        self
    }

    pub fn with_details_error(self, domain: impl Into<String>, error: BrandLookupError) -> Self {
        self.lock().details.insert(domain.into(), Err(error));
        self
    }

    /// Delays answers for a query or domain.
    pub fn with_delay(self, key: impl Into<String>, delay: Duration) -> Self {
        self.lock().delays.insert(key.into(), delay);
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.lock().search_calls.clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.lock().detail_calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn pause_for(&self, key: &str) {
        let delay = self.lock().delays.get(key).copied();
        if let Some(delay) = delay {
            sleep(delay).await;
        }
    }
}

/// Search hit with a display name.
pub fn search_hit(domain: &str, name: &str) -> BrandSearchHit {
    BrandSearchHit {
        domain: domain.to_string(),
        name: Some(name.to_string()),
        icon: None,
        logo: None,
    }
}

/// Brand details with one logo rendition.
pub fn brand_details(name: &str, description: &str, logo_src: &str) -> BrandDetails {
    BrandDetails {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        logos: vec![BrandLogo {
            theme: Some("light".to_string()),
            formats: vec![BrandLogoFormat {
                src: Some(logo_src.to_string()),
                width: None,
                height: None,
                format: Some("png".to_string()),
            }],
        }],
    }
}

#[async_trait]
impl BrandLookup for MockBrandLookup {
    async fn search(&self, query: &str) -> Result<Vec<BrandSearchHit>, BrandLookupError> {
        self.lock().search_calls.push(query.to_string());
        self.pause_for(query).await;
        self.lock()
            .searches
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn details(&self, domain: &str) -> Result<BrandDetails, BrandLookupError> {
        self.lock().detail_calls.push(domain.to_string());
        self.pause_for(domain).await;
        self.lock()
            .details
            .get(domain)
            .cloned()
            .unwrap_or_else(|| Err(BrandLookupError::status(404, "brand not found")))
    }
}
