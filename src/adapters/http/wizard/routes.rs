//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    apply_intent, create_wizard, delete_wizard, get_confirmation, get_wizard, WizardHandlers,
};

/// Creates the wizard router, mounted under `/api/wizards`.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(create_wizard))
        .route("/:id", get(get_wizard).delete(delete_wizard))
        .route("/:id/intents", post(apply_intent))
        .route("/:id/confirmation", get(get_confirmation))
        .with_state(handlers)
}
