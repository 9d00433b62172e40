//! Document Service Port - Interface for brief document generation.
//!
//! The collaborator clones a template, substitutes placeholders, inserts
//! the brand logo and grants the requester access. From our side it is a
//! single request/response call.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for creating a brief document from a template.
///
/// The call is not idempotent; callers must not retry on their own.
#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn create_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<DocumentReference, DocumentServiceError>;
}

/// Body of a document creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub template_id: String,
    pub title: String,
    pub folder_name: String,
    pub replacements: BTreeMap<String, String>,
    pub user_email: String,
    pub logo_url: String,
    pub website: String,
}

/// Reference to the created document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    pub document_url: String,
}

/// Errors from the document collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentServiceError {
    /// The collaborator refused the request. `message` is its own `error`
    /// text when it sent one.
    #[error("document service rejected the request ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl DocumentServiceError {
    /// Message suitable for showing to the requester, if the collaborator
    /// supplied one.
    pub fn collaborator_message(&self) -> Option<&str> {
        match self {
            DocumentServiceError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
