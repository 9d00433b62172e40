//! FetchSuggestionsHandler - Query handler for website autocomplete.

use std::sync::Arc;

use crate::domain::wizard::{Suggestion, WizardError};
use crate::ports::{BrandLookup, BrandLookupError, BrandSearchHit};

/// Query for brands matching the typed website text.
#[derive(Debug, Clone)]
pub struct FetchSuggestionsQuery {
    pub query: String,
}

pub type FetchSuggestionsResult = Vec<Suggestion>;

/// Runs one brand search and normalizes the hits into suggestions.
pub struct FetchSuggestionsHandler {
    lookup: Arc<dyn BrandLookup>,
}

impl FetchSuggestionsHandler {
    pub fn new(lookup: Arc<dyn BrandLookup>) -> Self {
        Self { lookup }
    }

    pub async fn handle(
        &self,
        query: FetchSuggestionsQuery,
    ) -> Result<FetchSuggestionsResult, WizardError> {
        let hits = self.lookup.search(&query.query).await.map_err(|e| {
            tracing::warn!(query = %query.query, error = %e, "brand search failed");
            lookup_error(e)
        })?;

        Ok(hits
            .into_iter()
            .filter(|hit| !hit.domain.trim().is_empty())
            .map(to_suggestion)
            .collect())
    }
}

fn to_suggestion(hit: BrandSearchHit) -> Suggestion {
    let icon = hit.icon.or(hit.logo).filter(|url| !url.trim().is_empty());
    Suggestion::new(hit.domain, hit.name, icon)
}

/// Maps brand directory failures into the wizard taxonomy.
pub(crate) fn lookup_error(error: BrandLookupError) -> WizardError {
    match error {
        BrandLookupError::Malformed(message) => WizardError::malformed(message),
        other => WizardError::network(other.to_string()),
    }
}
