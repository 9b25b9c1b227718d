//! Shopify Admin API GraphQL client.
//!
//! This module provides a typed client for the Shopify Admin API. The client
//! holds only transport settings; credentials arrive per call through a
//! [`ShopSession`].

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ShopifyAdminConfig;

use super::{AdminShopifyError, GraphQLError, ShopSession};

mod payment_customizations;
pub mod queries;

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    api_version: String,
    /// Fixed endpoint, replacing the per-shop URL when set
    endpoint: Option<String>,
}

/// GraphQL error entry as returned on the wire.
#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Shopify Admin API configuration
    #[must_use]
    pub fn new(config: &ShopifyAdminConfig) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                api_version: config.api_version.clone(),
                endpoint: config.endpoint.clone(),
            }),
        }
    }

    /// GraphQL endpoint for a shop.
    #[must_use]
    pub fn endpoint(&self, session: &ShopSession) -> String {
        self.inner.endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://{}/admin/api/{}/graphql.json",
                session.shop(),
                self.inner.api_version
            )
        })
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL operation on behalf of `session`.
    ///
    /// Non-success statuses keep the raw body, and responses carrying
    /// top-level `errors` keep the full document, so callers can surface
    /// exactly what Shopify said.
    async fn execute<Q: GraphQLQuery>(
        &self,
        session: &ShopSession,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, AdminShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.endpoint(session))
            .header("X-Shopify-Access-Token", session.access_token())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                operation = body.operation_name,
                status = status.as_u16(),
                "Shopify request failed"
            );
            return Err(AdminShopifyError::Response {
                status: status.as_u16(),
                body: text,
            });
        }

        let mut document: serde_json::Value = serde_json::from_str(&text)?;

        // Check for GraphQL errors
        let errors = document
            .get("errors")
            .filter(|e| !is_empty_array(e))
            .cloned();
        if let Some(errors) = errors {
            let errors: Vec<GraphQLErrorResponse> = serde_json::from_value(errors)?;
            let errors = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    path: e.path,
                })
                .collect();
            return Err(AdminShopifyError::GraphQL {
                errors,
                response: document,
            });
        }

        match document.get_mut("data").map(serde_json::Value::take) {
            Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
            _ => Err(AdminShopifyError::GraphQL {
                errors: vec![GraphQLError {
                    message: "No data in response".to_string(),
                    path: vec![],
                }],
                response: document,
            }),
        }
    }
}

fn is_empty_array(value: &serde_json::Value) -> bool {
    value.as_array().is_some_and(Vec::is_empty) || value.is_null()
}
