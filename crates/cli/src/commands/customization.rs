//! Payment customization commands.
//!
//! # Usage
//!
//! ```bash
//! pr-cli customization create --function-id 01HX... --payment-method "Cash on Delivery" --cart-total 100
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE` - Shopify store domain
//! - `SHOPIFY_ADMIN_ACCESS_TOKEN` - Admin API access token
//! - `SHOPIFY_API_VERSION` - API version (optional)

use payment_reorder_admin::config::{ConfigError, ShopifyAdminConfig};
use payment_reorder_admin::services::{
    InvalidPaymentCustomization, NewPaymentCustomization, create_payment_customization,
};
use payment_reorder_admin::shopify::{AdminClient, AdminShopifyError, PaymentCustomization};
use thiserror::Error;

/// Errors that can occur during customization commands.
#[derive(Debug, Error)]
pub enum CustomizationError {
    /// Shopify configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The function ID or rule settings are invalid.
    #[error("Invalid settings: {0}")]
    Settings(#[from] InvalidPaymentCustomization),

    /// Shopify rejected a mutation or could not be reached.
    #[error(transparent)]
    Shopify(#[from] AdminShopifyError),
}

/// Create and configure a payment customization.
///
/// # Arguments
///
/// * `function_id` - Deployed function ID
/// * `payment_method` - Payment method name (or part of it) to move to the top
/// * `cart_total` - Largest cart total for which the method is moved
pub async fn create(
    function_id: &str,
    payment_method: &str,
    cart_total: f64,
) -> Result<PaymentCustomization, CustomizationError> {
    let request = NewPaymentCustomization::new(function_id, payment_method, cart_total)?;

    let config = ShopifyAdminConfig::from_env()?;
    let client = AdminClient::new(&config);
    let session = config.session();

    tracing::info!("Creating payment customization on {}", session.shop());
    let customization = create_payment_customization(&client, &session, &request).await?;
    tracing::info!("Created {} ({})", customization.title, customization.id);

    Ok(customization)
}
