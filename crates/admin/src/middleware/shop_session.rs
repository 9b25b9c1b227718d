//! Shop session extractor.
//!
//! Hands the handler an explicit [`ShopSession`] instead of letting the
//! Shopify client reach into global state.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::shopify::ShopSession;
use crate::state::AppState;

/// Header the embedded admin UI uses to name the shop it is running in.
pub const SHOP_DOMAIN_HEADER: &str = "x-shopify-shop-domain";

/// Extractor that provides the session for the requesting shop.
///
/// Requests may name their shop with the `X-Shopify-Shop-Domain` header.
/// A request naming a different shop than the one this backend is installed
/// on is rejected with 403.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     State(state): State<AppState>,
///     CurrentShop(session): CurrentShop,
/// ) -> Result<(), AppError> {
///     state.shopify().create_payment_customization(&session, ...).await?;
///     Ok(())
/// }
/// ```
pub struct CurrentShop(pub ShopSession);

impl FromRequestParts<AppState> for CurrentShop {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.shop_session();

        if let Some(requested) = parts.headers.get(SHOP_DOMAIN_HEADER) {
            let requested = requested.to_str().unwrap_or_default();
            if !requested.eq_ignore_ascii_case(session.shop()) {
                tracing::warn!(
                    requested_shop = requested,
                    installed_shop = session.shop(),
                    "Rejecting request for another shop"
                );
                return Err(AppError::Forbidden(format!(
                    "shop {requested} is not served by this backend"
                )));
            }
        }

        Ok(Self(session))
    }
}
