//! Document service adapters.

mod http_client;
mod mock;

pub use http_client::{DocumentServiceConfig, HttpDocumentService};
pub use mock::{MockDocumentService, MOCK_DOCUMENT_URL};
