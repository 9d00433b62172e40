//! ResolveBrandHandler - Fetches brand details for a chosen domain.

use std::sync::Arc;

use crate::domain::wizard::{BrandProfile, LogoCandidate, LogoFormat, WizardError};
use crate::ports::{BrandDetails, BrandLookup};

use super::fetch_suggestions::lookup_error;

#[derive(Debug, Clone)]
pub struct ResolveBrandCommand {
    pub domain: String,
}

pub type ResolveBrandResult = BrandProfile;

/// Handler for brand detail resolution.
///
/// Normalizes the directory payload: missing text fields become empty and
/// renditions without a source URL are dropped.
pub struct ResolveBrandHandler {
    lookup: Arc<dyn BrandLookup>,
}

impl ResolveBrandHandler {
    pub fn new(lookup: Arc<dyn BrandLookup>) -> Self {
        Self { lookup }
    }

    pub async fn handle(&self, cmd: ResolveBrandCommand) -> Result<ResolveBrandResult, WizardError> {
        let details = self.lookup.details(&cmd.domain).await.map_err(|e| {
            tracing::warn!(domain = %cmd.domain, error = %e, "brand details lookup failed");
            lookup_error(e)
        })?;

        tracing::debug!(domain = %cmd.domain, logos = details.logos.len(), "brand resolved");
        Ok(to_profile(cmd.domain, details))
    }
}

fn to_profile(domain: String, details: BrandDetails) -> BrandProfile {
    let candidates = details
        .logos
        .into_iter()
        .map(|logo| LogoCandidate {
            theme: logo.theme,
            formats: logo
                .formats
                .into_iter()
                .filter_map(|format| {
                    let url = format.src.filter(|src| !src.trim().is_empty())?;
                    Some(LogoFormat {
                        url,
                        width: format.width,
                        height: format.height,
                    })
                })
                .collect(),
        })
        .filter(|candidate| !candidate.formats.is_empty())
        .collect();

    BrandProfile::new(
        domain,
        details.name.unwrap_or_default(),
        details.description.unwrap_or_default(),
        candidates,
    )
}
