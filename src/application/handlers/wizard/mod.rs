//! Wizard handlers.
//!
//! One handler per collaborator call made on behalf of a session:
//!
//! - Fetching autocomplete suggestions
//! - Resolving brand details for a domain
//! - Submitting the assembled brief

mod fetch_suggestions;
mod resolve_brand;
mod submit_brief;

pub use fetch_suggestions::{FetchSuggestionsHandler, FetchSuggestionsQuery, FetchSuggestionsResult};
pub use resolve_brand::{ResolveBrandCommand, ResolveBrandHandler, ResolveBrandResult};
pub use submit_brief::{SubmitBriefCommand, SubmitBriefHandler, SubmitBriefResult};
