//! Integration test helpers for payment reorder.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p payment-reorder-integration-tests
//! ```
//!
//! No external services are needed: admin tests run the router in-process
//! and point the Shopify client at a [`FakeShopify`] GraphQL server bound to
//! an ephemeral local port.
//!
//! # Test Categories
//!
//! - `function_rule` - Function scenarios and rule properties
//! - `admin_payment_customization` - Create-then-configure HTTP endpoint

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use payment_reorder_admin::config::{AdminConfig, ShopifyAdminConfig};
use payment_reorder_admin::routes;
use payment_reorder_admin::state::AppState;
use payment_reorder_function::FunctionInput;
use secrecy::SecretString;
use serde_json::{Value, json};

/// Store domain used by test configurations.
pub const TEST_SHOP: &str = "test-shop.myshopify.com";

/// Access token used by test configurations.
pub const TEST_ACCESS_TOKEN: &str = "shpat_4fQ9zL2mX7bN1kR8tV3wY6pC";

// =============================================================================
// Function fixtures
// =============================================================================

/// Build a function input document.
///
/// `metafield` is the raw configuration JSON; `None` omits the metafield.
#[must_use]
pub fn function_input(metafield: Option<&str>, amount: &str, methods: &[(&str, &str)]) -> FunctionInput {
    let payment_methods: Vec<Value> = methods
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();

    let payment_customization = metafield.map_or(Value::Null, |value| {
        json!({ "metafield": { "value": value } })
    });

    serde_json::from_value(json!({
        "cart": { "cost": { "totalAmount": { "amount": amount } } },
        "paymentMethods": payment_methods,
        "paymentCustomization": payment_customization,
    }))
    .unwrap()
}

// =============================================================================
// Fake Shopify Admin API
// =============================================================================

/// A GraphQL request received by [`FakeShopify`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// `operationName` from the request body.
    pub operation_name: String,
    /// `variables` from the request body.
    pub variables: Value,
    /// `X-Shopify-Access-Token` header value.
    pub access_token: Option<String>,
}

/// Canned answer for one operation.
#[derive(Debug, Clone)]
pub enum Reply {
    /// HTTP 200 with this JSON document.
    Json(Value),
    /// Any status with a plain text body.
    Status(u16, String),
}

struct FakeState {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Local stand-in for the Shopify Admin GraphQL endpoint.
pub struct FakeShopify {
    endpoint: String,
    state: Arc<FakeState>,
}

impl FakeShopify {
    /// Start a server answering each operation name with its reply.
    ///
    /// Operations without a reply get a GraphQL error document.
    pub async fn start(replies: impl IntoIterator<Item = (&'static str, Reply)>) -> Self {
        let state = Arc::new(FakeState {
            replies: replies
                .into_iter()
                .map(|(name, reply)| (name.to_string(), reply))
                .collect(),
            calls: Mutex::default(),
        });

        let app = Router::new()
            .route("/admin/api/graphql.json", post(graphql))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{addr}/admin/api/graphql.json"),
            state,
        }
    }

    /// URL to configure as `SHOPIFY_ADMIN_ENDPOINT`.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    /// Operation names received so far, in order.
    #[must_use]
    pub fn operations(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.operation_name).collect()
    }
}

async fn graphql(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let operation_name = body["operationName"].as_str().unwrap_or_default().to_string();

    state.calls.lock().unwrap().push(RecordedCall {
        operation_name: operation_name.clone(),
        variables: body["variables"].clone(),
        access_token: headers
            .get("x-shopify-access-token")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    });

    match state.replies.get(&operation_name) {
        Some(Reply::Json(document)) => Json(document.clone()).into_response(),
        Some(Reply::Status(status, text)) => (
            StatusCode::from_u16(*status).unwrap(),
            text.clone(),
        )
            .into_response(),
        None => Json(json!({
            "errors": [{ "message": format!("Unexpected operation {operation_name}") }]
        }))
        .into_response(),
    }
}

/// Successful `paymentCustomizationCreate` document.
#[must_use]
pub fn created_customization(id: &str) -> Reply {
    Reply::Json(json!({
        "data": {
            "paymentCustomizationCreate": {
                "paymentCustomization": {
                    "id": id,
                    "title": "Move COD to the top",
                    "enabled": true
                },
                "userErrors": []
            }
        }
    }))
}

/// Successful `metafieldsSet` document.
#[must_use]
pub fn metafields_saved() -> Reply {
    Reply::Json(json!({
        "data": {
            "metafieldsSet": {
                "metafields": [{
                    "id": "gid://shopify/Metafield/1",
                    "namespace": "$app:payment-customization",
                    "key": "function-configuration"
                }],
                "userErrors": []
            }
        }
    }))
}

/// Mutation document carrying `userErrors` under `root`.
#[must_use]
pub fn user_errors(root: &str, messages: &[&str]) -> Reply {
    let errors: Vec<Value> = messages
        .iter()
        .map(|m| json!({ "field": null, "message": m }))
        .collect();
    let mut data = serde_json::Map::new();
    data.insert(root.to_string(), json!({ "userErrors": errors }));
    Reply::Json(json!({ "data": data }))
}

// =============================================================================
// Admin app
// =============================================================================

/// Admin configuration pointing at `endpoint`.
#[must_use]
pub fn admin_config(endpoint: &str) -> AdminConfig {
    AdminConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        static_dir: None,
        shopify: ShopifyAdminConfig {
            store: TEST_SHOP.to_string(),
            api_version: "2026-01".to_string(),
            access_token: SecretString::from(TEST_ACCESS_TOKEN),
            endpoint: Some(endpoint.to_string()),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// Admin router wired to `shopify`.
#[must_use]
pub fn admin_app(shopify: &FakeShopify) -> Router {
    routes::routes().with_state(AppState::new(admin_config(shopify.endpoint())))
}
