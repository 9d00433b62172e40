//! HTTP routes for the brand lookup proxy.

use axum::{routing::get, Router};

use super::handlers::{brand_details, search_brands, BrandHandlers};

/// Creates the brand router, mounted under `/api/brands`.
pub fn brand_routes(handlers: BrandHandlers) -> Router {
    Router::new()
        .route("/search", get(search_brands))
        .route("/details", get(brand_details))
        .with_state(handlers)
}
