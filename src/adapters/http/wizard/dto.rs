//! DTOs for wizard endpoints.
//!
//! Session state is returned as [`WizardView`](crate::domain::wizard::WizardView)
//! directly; intents are accepted as tagged
//! [`WizardIntent`](crate::application::WizardIntent) JSON.

use serde::{Deserialize, Serialize};

use crate::domain::wizard::Confirmation;

/// Shown when the brand has no logo.
pub const PLACEHOLDER_LOGO_URL: &str = "/placeholder.svg?height=100&width=100";

/// Body of the confirmation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationResponse {
    pub document_url: String,
    pub logo_url: String,
}

impl From<Confirmation> for ConfirmationResponse {
    fn from(confirmation: Confirmation) -> Self {
        Self {
            document_url: confirmation.document_url,
            logo_url: confirmation
                .logo_url
                .unwrap_or_else(|| PLACEHOLDER_LOGO_URL.to_string()),
        }
    }
}
