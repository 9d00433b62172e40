//! Mock document service for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::ports::{DocumentReference, DocumentRequest, DocumentService, DocumentServiceError};

pub const MOCK_DOCUMENT_URL: &str = "https://docs.example.com/document/d/mock";

/// In-memory [`DocumentService`]. Queued answers are consumed in order;
/// once the queue is empty every call succeeds with [`MOCK_DOCUMENT_URL`].
#[derive(Debug, Clone, Default)]
pub struct MockDocumentService {
    responses: Arc<Mutex<VecDeque<Result<DocumentReference, DocumentServiceError>>>>,
    requests: Arc<Mutex<Vec<DocumentRequest>>>,
    delay: Duration,
}

impl MockDocumentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_url(self, url: impl Into<String>) -> Self {
        self.push(Ok(DocumentReference {
            document_url: url.into(),
        }));
        self
    }

    pub fn with_error(self, error: DocumentServiceError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn requests(&self) -> Vec<DocumentRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn push(&self, response: Result<DocumentReference, DocumentServiceError>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }
}

#[async_trait]
impl DocumentService for MockDocumentService {
    async fn create_document(
        &self,
        request: &DocumentRequest,
    ) -> Result<DocumentReference, DocumentServiceError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        next.unwrap_or_else(|| {
            Ok(DocumentReference {
                document_url: MOCK_DOCUMENT_URL.to_string(),
            })
        })
    }
}
