//! HTTP adapter for the brand lookup proxy.

mod dto;
mod handlers;
mod routes;

pub use dto::{DetailsParams, ProxyErrorResponse, SearchParams};
pub use handlers::BrandHandlers;
pub use routes::brand_routes;
