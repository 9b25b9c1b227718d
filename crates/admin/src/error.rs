//! Unified error handling for admin.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::shopify::AdminShopifyError;

/// Application-level error type for the admin backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request targets a shop this backend does not serve.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// JSON value placed under `error` in the response body.
    ///
    /// Shopify failures pass through what Shopify said: joined user error
    /// messages, or the raw response document for transport failures.
    fn detail(&self) -> Value {
        match self {
            Self::Shopify(AdminShopifyError::UserError(message)) => Value::String(message.clone()),
            Self::Shopify(AdminShopifyError::GraphQL { response, .. }) => response.clone(),
            Self::Shopify(AdminShopifyError::Response { body, .. }) => {
                serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.clone()))
            }
            Self::Shopify(err) => Value::String(err.to_string()),
            Self::BadRequest(message) | Self::Forbidden(message) => Value::String(message.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Shopify(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let status = match &self {
            Self::Shopify(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        };

        (status, Json(json!({ "error": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Forbidden("test".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::Shopify(AdminShopifyError::UserError(
                "Function not found.".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_error_detail_is_message() {
        let err = AppError::Shopify(AdminShopifyError::UserError("a b".to_string()));
        assert_eq!(err.detail(), json!("a b"));
    }

    #[test]
    fn test_graphql_error_detail_is_raw_response() {
        let response = json!({ "errors": [{ "message": "Throttled" }] });
        let err = AppError::Shopify(AdminShopifyError::GraphQL {
            errors: vec![],
            response: response.clone(),
        });
        assert_eq!(err.detail(), response);
    }

    #[test]
    fn test_response_error_detail_keeps_text_body() {
        let err = AppError::Shopify(AdminShopifyError::Response {
            status: 502,
            body: "Bad Gateway".to_string(),
        });
        assert_eq!(err.detail(), json!("Bad Gateway"));
    }
}
