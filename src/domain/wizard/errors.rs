//! Error taxonomy for the wizard.
//!
//! Network-origin variants end up in the session's error slot; validation
//! and busy refusals stay local to the caller.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

pub const SUGGESTIONS_FAILED_MESSAGE: &str = "Failed to fetch suggestions. Please try again.";
pub const BRAND_DETAILS_FAILED_MESSAGE: &str = "Failed to fetch brand details. Please try again.";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to create brief. Please try again.";

/// Errors produced while driving a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Non-2xx status or transport error from a collaborator.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// A collaborator answered with an unexpected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A transition guard or input check was not met.
    #[error("validation failed: {0}")]
    ValidationFailure(#[from] ValidationError),

    /// The document collaborator rejected the brief.
    #[error("submission failed: {}", .0.as_deref().unwrap_or("no details"))]
    SubmissionFailure(Option<String>),

    /// A conflicting call is still in flight.
    #[error("busy: {0}")]
    Busy(String),
}

impl WizardError {
    pub fn network(message: impl Into<String>) -> Self {
        WizardError::NetworkFailure(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        WizardError::MalformedResponse(message.into())
    }

    pub fn busy(message: impl Into<String>) -> Self {
        WizardError::Busy(message.into())
    }

    /// Local refusals never populate the session error slot.
    pub fn is_local(&self) -> bool {
        matches!(self, WizardError::ValidationFailure(_) | WizardError::Busy(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NetworkFailure(_) => ErrorCode::NetworkFailure,
            WizardError::MalformedResponse(_) => ErrorCode::MalformedResponse,
            WizardError::ValidationFailure(_) => ErrorCode::ValidationFailed,
            WizardError::SubmissionFailure(_) => ErrorCode::SubmissionFailed,
            WizardError::Busy(_) => ErrorCode::Busy,
        }
    }
}

/// The user action a network failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAction {
    Suggestions,
    BrandDetails,
    Submission,
}

impl FailedAction {
    /// Banner text for a failure of this action.
    pub fn user_message(&self, error: &WizardError) -> String {
        match (self, error) {
            (FailedAction::Suggestions, _) => SUGGESTIONS_FAILED_MESSAGE.to_string(),
            (FailedAction::BrandDetails, _) => BRAND_DETAILS_FAILED_MESSAGE.to_string(),
            (FailedAction::Submission, WizardError::SubmissionFailure(Some(message)))
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            (FailedAction::Submission, _) => SUBMISSION_FAILED_MESSAGE.to_string(),
        }
    }
}
