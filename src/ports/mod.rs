//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BrandLookup` - Brand directory search and detail lookup
//! - `DocumentService` - Brief document generation

mod brand_lookup;
mod document_service;

pub use brand_lookup::{
    BrandDetails, BrandLogo, BrandLogoFormat, BrandLookup, BrandLookupError, BrandSearchHit,
};
pub use document_service::{
    DocumentReference, DocumentRequest, DocumentService, DocumentServiceError,
};
