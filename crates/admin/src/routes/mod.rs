//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                             - Liveness check
//!
//! # Payment customizations (JSON API)
//! POST /api/paymentCustomization/create    - Create and configure a customization
//! ```
//!
//! The management UI build directory, when configured, is served for every
//! other path by `main`.

pub mod api;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(api::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Shopify.
async fn health() -> &'static str {
    "ok"
}
