//! Payment customization API handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::CurrentShop;
use crate::services::{NewPaymentCustomization, create_payment_customization};
use crate::state::AppState;

/// Build the payment customization router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/paymentCustomization/create", post(create))
}

/// Request for creating a payment customization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentCustomizationRequest {
    /// Deployed function ID.
    pub function_id: String,
    /// Payment method name (or part of it) to move to the top.
    pub payment_method: String,
    /// Largest cart total for which the method is moved.
    pub cart_total: f64,
}

impl TryFrom<CreatePaymentCustomizationRequest> for NewPaymentCustomization {
    type Error = AppError;

    fn try_from(body: CreatePaymentCustomizationRequest) -> Result<Self, Self::Error> {
        Self::new(&body.function_id, body.payment_method, body.cart_total)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

/// POST /api/paymentCustomization/create - Create and configure a customization.
///
/// Responds 200 with an empty body on success. Shopify user errors and
/// transport failures respond 500 with `{ "error": ... }`.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a body that is not valid JSON of the
/// expected shape or carries invalid settings (no Shopify call is made), and
/// `AppError::Shopify` when either mutation fails.
#[instrument(skip(state, session, body))]
pub async fn create(
    State(state): State<AppState>,
    CurrentShop(session): CurrentShop,
    body: Result<Json<CreatePaymentCustomizationRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(body) = body?;
    let request = NewPaymentCustomization::try_from(body)?;

    create_payment_customization(state.shopify(), &session, &request).await?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(function_id: &str, payment_method: &str, cart_total: f64) -> CreatePaymentCustomizationRequest {
        CreatePaymentCustomizationRequest {
            function_id: function_id.to_string(),
            payment_method: payment_method.to_string(),
            cart_total,
        }
    }

    #[test]
    fn test_valid_request() {
        let request = NewPaymentCustomization::try_from(body(" fn-1 ", "COD", 100.0));
        assert!(matches!(request, Ok(ref r) if r.function_id.as_str() == "fn-1"));
    }

    #[test]
    fn test_empty_function_id_rejected() {
        assert!(matches!(
            NewPaymentCustomization::try_from(body("", "COD", 100.0)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert!(matches!(
            NewPaymentCustomization::try_from(body("fn-1", "", 100.0)),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            NewPaymentCustomization::try_from(body("fn-1", "COD", -1.0)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let parsed: CreatePaymentCustomizationRequest = serde_json::from_str(
            r#"{"functionId":"fn-1","paymentMethod":"COD","cartTotal":100}"#,
        )
        .unwrap_or_else(|_| body("", "", 0.0));
        assert_eq!(parsed.function_id, "fn-1");
        assert_eq!(parsed.payment_method, "COD");
    }
}
