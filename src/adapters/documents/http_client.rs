//! HTTP document service - Implementation of DocumentService over the
//! `POST {base}/documents` contract.
//!
//! Failures carrying a JSON `{"error": "..."}` body keep that text so it
//! can be shown to the requester verbatim.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::ports::{DocumentReference, DocumentRequest, DocumentService, DocumentServiceError};

/// Configuration for the document service client.
#[derive(Debug, Clone)]
pub struct DocumentServiceConfig {
    pub base_url: String,
    api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl DocumentServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn documents_url(&self) -> String {
        format!("{}/documents", self.base_url.trim_end_matches('/'))
    }
}

pub struct HttpDocumentService {
    config: DocumentServiceConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpDocumentService {
    pub fn new(config: DocumentServiceConfig) -> Result<Self, DocumentServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DocumentServiceError::Network(format!("http client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl DocumentService for HttpDocumentService {
    async fn create_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<DocumentReference, DocumentServiceError> {
        let mut builder = self.client.post(self.config.documents_url()).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DocumentServiceError::Network(format!(
                    "timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else {
                DocumentServiceError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DocumentServiceError::Network(format!("failed to read body: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error)
                .filter(|m| !m.trim().is_empty());
            tracing::warn!(status = status.as_u16(), ?message, "document creation rejected");
            return Err(DocumentServiceError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let reference: DocumentReference = serde_json::from_str(&body)
            .map_err(|e| DocumentServiceError::Malformed(format!("document reference: {}", e)))?;
        if reference.document_url.trim().is_empty() {
            return Err(DocumentServiceError::Malformed("empty documentUrl".to_string()));
        }
        Ok(reference)
    }
}
