//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `brandfetch` - Brand search and details lookup
//! - `documents` - Brief document generation
//! - `http` - REST API served to the browser

pub mod brandfetch;
pub mod documents;
pub mod http;
