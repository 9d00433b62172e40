//! Error primitives shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when a value or a transition fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Machine-readable error codes exposed through the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    BadRequest,

    // Not found / state errors
    WizardNotFound,
    InvalidStateTransition,
    Busy,
    NotConfirmed,

    // Collaborator errors
    NetworkFailure,
    MalformedResponse,
    SubmissionFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::WizardNotFound => "WIZARD_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::Busy => "BUSY",
            ErrorCode::NotConfirmed => "NOT_CONFIRMED",
            ErrorCode::NetworkFailure => "NETWORK_FAILURE",
            ErrorCode::MalformedResponse => "MALFORMED_RESPONSE",
            ErrorCode::SubmissionFailed => "SUBMISSION_FAILED",
        };
        write!(f, "{}", s)
    }
}
