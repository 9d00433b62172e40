//! Application handlers.
//!
//! Command and query handlers that call out to ports on behalf of a
//! wizard session.

pub mod wizard;

pub use wizard::{
    FetchSuggestionsHandler, FetchSuggestionsQuery, FetchSuggestionsResult, ResolveBrandCommand,
    ResolveBrandHandler, ResolveBrandResult, SubmitBriefCommand, SubmitBriefHandler,
    SubmitBriefResult,
};
