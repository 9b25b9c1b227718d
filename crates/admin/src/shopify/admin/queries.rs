//! GraphQL operation definitions for Shopify Admin API.
//!
//! Each operation implements `graphql_client::GraphQLQuery` over the
//! document in `graphql/admin/queries/`, with request and response types laid
//! out the way `#[derive(GraphQLQuery)]` generates them (a snake_case module
//! holding `Variables` and `ResponseData`).

use graphql_client::{GraphQLQuery, QueryBody};

use crate::shopify::types::{PaymentCustomization, UserError};

/// Payment customization mutations document.
const PAYMENT_CUSTOMIZATIONS_DOCUMENT: &str =
    include_str!("../../../graphql/admin/queries/payment_customizations.graphql");

// =============================================================================
// Payment customization mutations
// =============================================================================

/// `paymentCustomizationCreate` mutation.
pub struct PaymentCustomizationCreate;

pub mod payment_customization_create {
    use serde::{Deserialize, Serialize};

    use super::{PaymentCustomization, UserError};

    pub const OPERATION_NAME: &str = "PaymentCustomizationCreate";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: PaymentCustomizationInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PaymentCustomizationInput {
        pub function_id: String,
        pub title: String,
        pub enabled: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payment_customization_create: Option<Payload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub payment_customization: Option<PaymentCustomization>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }
}

impl GraphQLQuery for PaymentCustomizationCreate {
    type Variables = payment_customization_create::Variables;
    type ResponseData = payment_customization_create::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: PAYMENT_CUSTOMIZATIONS_DOCUMENT,
            operation_name: payment_customization_create::OPERATION_NAME,
        }
    }
}

/// `metafieldsSet` mutation.
pub struct MetafieldsSet;

pub mod metafields_set {
    use serde::{Deserialize, Serialize};

    use super::UserError;

    pub const OPERATION_NAME: &str = "MetafieldsSet";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub metafields: Vec<MetafieldsSetInput>,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MetafieldsSetInput {
        pub owner_id: String,
        pub namespace: String,
        pub key: String,
        #[serde(rename = "type")]
        pub type_: String,
        pub value: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub metafields_set: Option<Payload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[serde(default)]
        pub metafields: Option<Vec<Metafield>>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Metafield {
        pub id: String,
        pub namespace: String,
        pub key: String,
    }
}

impl GraphQLQuery for MetafieldsSet {
    type Variables = metafields_set::Variables;
    type ResponseData = metafields_set::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: PAYMENT_CUSTOMIZATIONS_DOCUMENT,
            operation_name: metafields_set::OPERATION_NAME,
        }
    }
}
