//! Domain types for Shopify Admin API.
//!
//! These types provide a clean API separate from the raw GraphQL response
//! documents in [`queries`](super::queries).

use payment_reorder_core::PaymentCustomizationId;
use serde::{Deserialize, Serialize};

/// A mutation user error (invalid input, missing function, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Merchant-facing message.
    pub message: String,
}

/// A payment customization record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCustomization {
    /// Shopify global ID.
    pub id: PaymentCustomizationId,
    /// Title shown in the Shopify admin.
    pub title: String,
    /// Whether checkout runs the customization.
    pub enabled: bool,
}
