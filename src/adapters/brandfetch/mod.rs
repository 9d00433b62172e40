//! Brandfetch adapters for the brand lookup port.

mod client;
mod mock;

pub use client::{BrandfetchClient, BrandfetchConfig, DEFAULT_BASE_URL};
pub use mock::{brand_details, search_hit, MockBrandLookup};
