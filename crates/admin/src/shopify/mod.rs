//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module handles the high-privilege Shopify Admin API token.**
//!
//! The token is carried by an explicit [`ShopSession`] passed to every
//! client call, never read from ambient state inside the client.
//!
//! # Architecture
//!
//! - Uses the `graphql_client` query trait for typed GraphQL operations
//! - Direct API calls to Shopify (no local database)
//! - Mutation `userErrors` surface as [`AdminShopifyError::UserError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use payment_reorder_admin::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify);
//! let session = config.shopify.session();
//!
//! let customization = client
//!     .create_payment_customization(&session, &function_id, "Move COD to the top", true)
//!     .await?;
//! ```

mod admin;
pub mod types;

pub use admin::{AdminClient, queries};
pub use types::*;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success HTTP status.
    #[error("Shopify responded with HTTP {status}: {body}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// GraphQL query returned top-level errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.errors))]
    GraphQL {
        /// Parsed errors.
        errors: Vec<GraphQLError>,
        /// The full response document.
        response: serde_json::Value,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// User error from mutation (e.g., invalid input).
    #[error("User error: {0}")]
    UserError(String),

    /// A mutation succeeded without returning the expected object.
    #[error("Missing payload: {0}")]
    MissingPayload(&'static str),
}

impl AdminShopifyError {
    /// Build a [`UserError`](Self::UserError) from mutation `userErrors`.
    ///
    /// Returns `None` when the list is empty. Messages are joined with a
    /// single space.
    #[must_use]
    pub fn from_user_errors(errors: &[UserError]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }

        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self::UserError(message))
    }
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The shop a request acts on behalf of.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopSession {
    shop: String,
    access_token: SecretString,
}

impl ShopSession {
    /// Create a session for `shop` authenticated with `access_token`.
    #[must_use]
    pub const fn new(shop: String, access_token: SecretString) -> Self {
        Self { shop, access_token }
    }

    /// Shop domain (e.g., your-store.myshopify.com).
    #[must_use]
    pub fn shop(&self) -> &str {
        &self.shop
    }

    /// Admin API access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl std::fmt::Debug for ShopSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopSession")
            .field("shop", &self.shop)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_error(message: &str) -> UserError {
        UserError {
            field: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                path: vec![],
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                path: vec![],
            },
        ];
        let err = AdminShopifyError::GraphQL {
            errors,
            response: serde_json::Value::Null,
        };
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_user_errors_joined_with_space() {
        let err = AdminShopifyError::from_user_errors(&[
            user_error("Function not found."),
            user_error("Title is too long."),
        ]);
        assert!(matches!(
            err,
            Some(AdminShopifyError::UserError(ref m)) if m == "Function not found. Title is too long."
        ));
    }

    #[test]
    fn test_no_user_errors() {
        assert!(AdminShopifyError::from_user_errors(&[]).is_none());
    }

    #[test]
    fn test_response_error_display() {
        let err = AdminShopifyError::Response {
            status: 401,
            body: "Invalid API key or access token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Shopify responded with HTTP 401: Invalid API key or access token"
        );
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = ShopSession::new(
            "test.myshopify.com".to_string(),
            SecretString::from("shpat_do_not_print"),
        );
        let debug_output = format!("{session:?}");
        assert!(debug_output.contains("test.myshopify.com"));
        assert!(!debug_output.contains("shpat_do_not_print"));
    }
}
