//! HTTP handlers for the brand lookup proxy.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    FetchSuggestionsHandler, FetchSuggestionsQuery, ResolveBrandCommand, ResolveBrandHandler,
};

use super::dto::{DetailsParams, ProxyErrorResponse, SearchParams};

pub const QUERY_REQUIRED: &str = "Query parameter is required";
pub const DOMAIN_REQUIRED: &str = "Domain parameter is required";
pub const LOOKUP_FAILED: &str = "Failed to fetch data from Brandfetch";

#[derive(Clone)]
pub struct BrandHandlers {
    suggestions: Arc<FetchSuggestionsHandler>,
    resolver: Arc<ResolveBrandHandler>,
}

impl BrandHandlers {
    pub fn new(suggestions: Arc<FetchSuggestionsHandler>, resolver: Arc<ResolveBrandHandler>) -> Self {
        Self {
            suggestions,
            resolver,
        }
    }
}

/// GET /api/brands/search?query= - Search brands
pub async fn search_brands(
    State(handlers): State<BrandHandlers>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(query) = non_blank(params.query) else {
        return proxy_error(StatusCode::BAD_REQUEST, QUERY_REQUIRED);
    };

    match handlers.suggestions.handle(FetchSuggestionsQuery { query }).await {
        Ok(suggestions) => (StatusCode::OK, Json(suggestions)).into_response(),
        Err(_) => proxy_error(StatusCode::BAD_GATEWAY, LOOKUP_FAILED),
    }
}

/// GET /api/brands/details?domain= - Brand details for a domain
pub async fn brand_details(
    State(handlers): State<BrandHandlers>,
    Query(params): Query<DetailsParams>,
) -> Response {
    let Some(domain) = non_blank(params.domain) else {
        return proxy_error(StatusCode::BAD_REQUEST, DOMAIN_REQUIRED);
    };

    match handlers.resolver.handle(ResolveBrandCommand { domain }).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(_) => proxy_error(StatusCode::BAD_GATEWAY, LOOKUP_FAILED),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn proxy_error(status: StatusCode, message: &str) -> Response {
    (status, Json(ProxyErrorResponse::new(message))).into_response()
}
