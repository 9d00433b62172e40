//! Campaign brief wizard domain module.
//!
//! Pure state and rules for one intake session; no I/O happens here.
//!
//! # Module Structure
//!
//! - `step` - Step and submission state machines
//! - `goals` - Campaign goal set
//! - `brand` - Suggestion and brand profile value objects
//! - `suggestions` - Debounced autocomplete bookkeeping
//! - `session` - The `WizardSession` aggregate
//! - `brief` - Document request assembly
//! - `view` - Read model for callers
//! - `errors` - Error taxonomy and user-facing messages

mod brand;
mod brief;
mod errors;
mod goals;
mod session;
mod step;
mod suggestions;
mod view;

pub use brand::{BrandProfile, LogoCandidate, LogoFormat, Suggestion};
pub use brief::{placeholders, BriefDraft};
pub use errors::{
    FailedAction, WizardError, BRAND_DETAILS_FAILED_MESSAGE, SUBMISSION_FAILED_MESSAGE,
    SUGGESTIONS_FAILED_MESSAGE,
};
pub use goals::{CampaignGoal, GoalSelection};
pub use session::{Confirmation, Identity, ResolutionOutcome, ResolveTicket, WizardSession};
pub use step::{SubmissionState, WizardStep};
pub use suggestions::{
    FeedUpdate, QueryOutcome, SearchTicket, SuggestionFeed, DEBOUNCE_WINDOW, MIN_QUERY_LENGTH,
};
pub use view::WizardView;
