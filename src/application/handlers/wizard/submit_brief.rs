//! SubmitBriefHandler - Sends an assembled brief to the document service.

use std::sync::Arc;

use crate::domain::wizard::{BriefDraft, WizardError};
use crate::ports::{DocumentRequest, DocumentService, DocumentServiceError};

#[derive(Debug, Clone)]
pub struct SubmitBriefCommand {
    pub draft: BriefDraft,
    pub template_id: String,
    pub folder_name: String,
}

/// URL of the created document.
pub type SubmitBriefResult = String;

pub struct SubmitBriefHandler {
    documents: Arc<dyn DocumentService>,
}

impl SubmitBriefHandler {
    pub fn new(documents: Arc<dyn DocumentService>) -> Self {
        Self { documents }
    }

    /// Makes a single attempt; the collaborator is not idempotent.
    pub async fn handle(&self, cmd: SubmitBriefCommand) -> Result<SubmitBriefResult, WizardError> {
        let request = DocumentRequest {
            template_id: cmd.template_id,
            title: cmd.draft.title,
            folder_name: cmd.folder_name,
            replacements: cmd.draft.replacements,
            user_email: cmd.draft.user_email,
            logo_url: cmd.draft.logo_url,
            website: cmd.draft.website,
        };

        match self.documents.create_document(&request).await {
            Ok(reference) => {
                tracing::info!(title = %request.title, "brief document created");
                Ok(reference.document_url)
            }
            Err(e) => {
                tracing::error!(title = %request.title, error = %e, "brief document creation failed");
                Err(submission_error(e))
            }
        }
    }
}

fn submission_error(error: DocumentServiceError) -> WizardError {
    match &error {
        DocumentServiceError::Rejected { .. } => {
            WizardError::SubmissionFailure(error.collaborator_message().map(str::to_string))
        }
        DocumentServiceError::Network(message) => WizardError::network(message.as_str()),
        DocumentServiceError::Malformed(message) => WizardError::malformed(message.as_str()),
    }
}
