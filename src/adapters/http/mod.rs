//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module split into DTOs, handlers and routes;
//! [`api_router`] assembles them.

pub mod brands;
mod error;
mod router;
pub mod wizard;

pub use brands::{brand_routes, BrandHandlers};
pub use error::ErrorResponse;
pub use router::{api_router, RouterSettings};
pub use wizard::{wizard_routes, ConfirmationResponse, WizardHandlers, PLACEHOLDER_LOGO_URL};
