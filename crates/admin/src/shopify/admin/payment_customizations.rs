//! Payment customization operations for the Admin API.

use payment_reorder_core::{
    Configuration, FunctionId, METAFIELD_KEY, METAFIELD_NAMESPACE, METAFIELD_TYPE,
    PaymentCustomizationId,
};
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError, ShopSession,
    queries::{MetafieldsSet, PaymentCustomizationCreate, metafields_set, payment_customization_create},
};
use crate::shopify::types::PaymentCustomization;

impl AdminClient {
    /// Create a payment customization backed by a function.
    ///
    /// # Arguments
    ///
    /// * `session` - Shop to act on
    /// * `function_id` - ID of the deployed payment customization function
    /// * `title` - Title shown in the Shopify admin
    /// * `enabled` - Whether checkout should run the customization right away
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::UserError` if Shopify rejects the input,
    /// or a transport error if the request fails.
    #[instrument(skip(self, session), fields(shop = %session.shop(), function_id = %function_id))]
    pub async fn create_payment_customization(
        &self,
        session: &ShopSession,
        function_id: &FunctionId,
        title: &str,
        enabled: bool,
    ) -> Result<PaymentCustomization, AdminShopifyError> {
        let variables = payment_customization_create::Variables {
            input: payment_customization_create::PaymentCustomizationInput {
                function_id: function_id.to_string(),
                title: title.to_string(),
                enabled,
            },
        };

        let response = self
            .execute::<PaymentCustomizationCreate>(session, variables)
            .await?;

        let payload = response
            .payment_customization_create
            .ok_or(AdminShopifyError::MissingPayload("paymentCustomizationCreate"))?;

        if let Some(err) = AdminShopifyError::from_user_errors(&payload.user_errors) {
            return Err(err);
        }

        let customization = payload
            .payment_customization
            .ok_or(AdminShopifyError::MissingPayload("paymentCustomization"))?;

        tracing::info!(customization_id = %customization.id, "Created payment customization");
        Ok(customization)
    }

    /// Store the function configuration on a payment customization.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::UserError` if Shopify rejects the
    /// metafield, or a transport error if the request fails.
    #[instrument(skip(self, session, configuration), fields(shop = %session.shop(), customization_id = %id))]
    pub async fn set_payment_customization_configuration(
        &self,
        session: &ShopSession,
        id: &PaymentCustomizationId,
        configuration: &Configuration,
    ) -> Result<(), AdminShopifyError> {
        let variables = metafields_set::Variables {
            metafields: vec![metafields_set::MetafieldsSetInput {
                owner_id: id.to_string(),
                namespace: METAFIELD_NAMESPACE.to_string(),
                key: METAFIELD_KEY.to_string(),
                type_: METAFIELD_TYPE.to_string(),
                value: configuration.to_metafield_value(),
            }],
        };

        let response = self.execute::<MetafieldsSet>(session, variables).await?;

        let payload = response
            .metafields_set
            .ok_or(AdminShopifyError::MissingPayload("metafieldsSet"))?;

        if let Some(err) = AdminShopifyError::from_user_errors(&payload.user_errors) {
            return Err(err);
        }

        tracing::info!("Stored payment customization configuration");
        Ok(())
    }
}
