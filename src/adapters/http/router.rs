//! Top-level router: health check, API modules and cross-cutting layers.

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::brands::{brand_routes, BrandHandlers};
use super::wizard::{wizard_routes, WizardHandlers};

/// Layer settings for [`api_router`].
#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    pub request_timeout: Option<Duration>,
    /// Allowed origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

/// Builds the complete HTTP API.
///
/// ```text
/// GET    /health
/// GET    /api/brands/search?query=
/// GET    /api/brands/details?domain=
/// POST   /api/wizards
/// GET    /api/wizards/:id
/// DELETE /api/wizards/:id
/// POST   /api/wizards/:id/intents
/// GET    /api/wizards/:id/confirmation
/// ```
pub fn api_router(brands: BrandHandlers, wizards: WizardHandlers, settings: &RouterSettings) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/brands", brand_routes(brands))
        .nest("/api/wizards", wizard_routes(wizards))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http());

    match settings.request_timeout {
        Some(timeout) => router.layer(TimeoutLayer::new(timeout)),
        None => router,
    }
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = allowed_origins(origins);
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}

fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
