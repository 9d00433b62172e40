//! HTTP adapter for wizard endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ConfirmationResponse, PLACEHOLDER_LOGO_URL};
pub use handlers::WizardHandlers;
pub use routes::wizard_routes;
