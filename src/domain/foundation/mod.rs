//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, validation errors and the state machine trait
//! used by the wizard domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::WizardId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
