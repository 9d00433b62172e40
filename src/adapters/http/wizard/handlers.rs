//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::{ControllerError, WizardHandle, WizardIntent, WizardRegistry};
use crate::domain::foundation::{ErrorCode, WizardId};
use crate::domain::wizard::WizardError;

use super::dto::ConfirmationResponse;

#[derive(Clone)]
pub struct WizardHandlers {
    registry: Arc<WizardRegistry>,
}

impl WizardHandlers {
    pub fn new(registry: Arc<WizardRegistry>) -> Self {
        Self { registry }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizards - Start a session
pub async fn create_wizard(State(handlers): State<WizardHandlers>) -> Response {
    let handle = handlers.registry.create().await;
    (StatusCode::CREATED, Json(handle.view())).into_response()
}

/// GET /api/wizards/:id - Current session view
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(id): Path<String>,
) -> Response {
    match find(&handlers, &id).await {
        Ok(handle) => (StatusCode::OK, Json(handle.view())).into_response(),
        Err(response) => response,
    }
}

/// POST /api/wizards/:id/intents - Apply one user intent
pub async fn apply_intent(
    State(handlers): State<WizardHandlers>,
    Path(id): Path<String>,
    Json(intent): Json<WizardIntent>,
) -> Response {
    let handle = match find(&handlers, &id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    match handle.apply(intent).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(ControllerError::Closed) => {
            ErrorResponse::not_found("Wizard", &id).with_status(StatusCode::NOT_FOUND)
        }
        Err(ControllerError::Rejected(error)) => handle_wizard_error(error),
    }
}

/// GET /api/wizards/:id/confirmation - Document link once confirmed
pub async fn get_confirmation(
    State(handlers): State<WizardHandlers>,
    Path(id): Path<String>,
) -> Response {
    let handle = match find(&handlers, &id).await {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    match handle.view().confirmation {
        Some(confirmation) => {
            (StatusCode::OK, Json(ConfirmationResponse::from(confirmation))).into_response()
        }
        None => ErrorResponse::new(ErrorCode::NotConfirmed, "The brief has not been created yet")
            .with_status(StatusCode::CONFLICT),
    }
}

/// DELETE /api/wizards/:id - End a session
pub async fn delete_wizard(
    State(handlers): State<WizardHandlers>,
    Path(id): Path<String>,
) -> Response {
    let wizard_id = match parse_id(&id) {
        Ok(wizard_id) => wizard_id,
        Err(response) => return response,
    };

    if handlers.registry.remove(&wizard_id).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        ErrorResponse::not_found("Wizard", &id).with_status(StatusCode::NOT_FOUND)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_id(id: &str) -> Result<WizardId, Response> {
    id.parse::<WizardId>().map_err(|_| {
        ErrorResponse::bad_request(format!("Invalid wizard id: {}", id))
            .with_status(StatusCode::BAD_REQUEST)
    })
}

async fn find(handlers: &WizardHandlers, id: &str) -> Result<WizardHandle, Response> {
    let wizard_id = parse_id(id)?;
    handlers.registry.get(&wizard_id).await.ok_or_else(|| {
        ErrorResponse::not_found("Wizard", id).with_status(StatusCode::NOT_FOUND)
    })
}

fn handle_wizard_error(error: WizardError) -> Response {
    match &error {
        WizardError::ValidationFailure(validation) => {
            let code = match validation.field() {
                "step" | "state_transition" => ErrorCode::InvalidStateTransition,
                _ => ErrorCode::ValidationFailed,
            };
            ErrorResponse::new(code, validation.to_string())
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        }
        WizardError::Busy(message) => {
            ErrorResponse::new(ErrorCode::Busy, message.clone()).with_status(StatusCode::CONFLICT)
        }
        other => {
            tracing::error!(error = %other, "unexpected wizard error");
            ErrorResponse::new(other.code(), other.to_string()).with_status(StatusCode::BAD_GATEWAY)
        }
    }
}
