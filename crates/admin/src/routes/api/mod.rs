//! API route handlers for admin.
//!
//! JSON API endpoints used by the management UI.

pub mod payment_customization;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(payment_customization::router())
}
