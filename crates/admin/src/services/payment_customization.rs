//! Payment customization setup.
//!
//! Registering a customization takes two sequential mutations: create the
//! record, then store the configuration metafield on it. The second call is
//! only made once the first has succeeded.

use payment_reorder_core::{Configuration, ConfigurationError, FunctionId};
use thiserror::Error;
use tracing::instrument;

use crate::shopify::{AdminClient, AdminShopifyError, PaymentCustomization, ShopSession};

/// A customization the merchant asked for.
#[derive(Debug, Clone)]
pub struct NewPaymentCustomization {
    /// Deployed function that implements the rule.
    pub function_id: FunctionId,
    /// Validated rule settings.
    pub configuration: Configuration,
}

/// Settings that cannot become a payment customization.
#[derive(Debug, Error)]
pub enum InvalidPaymentCustomization {
    /// The function ID is blank.
    #[error("functionId cannot be empty")]
    EmptyFunctionId,

    /// The rule settings are invalid.
    #[error(transparent)]
    Settings(#[from] ConfigurationError),
}

impl NewPaymentCustomization {
    /// Validate raw settings from the merchant.
    ///
    /// The function ID is trimmed before use.
    ///
    /// # Errors
    ///
    /// Returns an error if the function ID is blank or the rule settings are
    /// invalid.
    pub fn new(
        function_id: &str,
        payment_method: impl Into<String>,
        cart_total: f64,
    ) -> Result<Self, InvalidPaymentCustomization> {
        let function_id = function_id.trim();
        if function_id.is_empty() {
            return Err(InvalidPaymentCustomization::EmptyFunctionId);
        }

        Ok(Self {
            function_id: FunctionId::new(function_id),
            configuration: Configuration::new(payment_method, cart_total)?,
        })
    }

    /// Title shown in the Shopify admin.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Move {} to the top if the cart total is at most {}",
            self.configuration.payment_method_name(),
            self.configuration.cart_total()
        )
    }
}

/// Create an enabled payment customization and store its configuration.
///
/// # Errors
///
/// Returns the first error from either mutation. A failed create never
/// reaches the metafield mutation.
#[instrument(skip_all, fields(shop = %session.shop(), function_id = %request.function_id))]
pub async fn create_payment_customization(
    client: &AdminClient,
    session: &ShopSession,
    request: &NewPaymentCustomization,
) -> Result<PaymentCustomization, AdminShopifyError> {
    let customization = client
        .create_payment_customization(session, &request.function_id, &request.title(), true)
        .await?;

    client
        .set_payment_customization_configuration(session, &customization.id, &request.configuration)
        .await?;

    Ok(customization)
}
