//! Where the function configuration lives on the customization record.
//!
//! The `$app:` prefix reserves the namespace for the owning app, so the
//! admin backend and the function input query must agree on these values.

/// Metafield namespace holding the function configuration.
pub const METAFIELD_NAMESPACE: &str = "$app:payment-customization";

/// Metafield key holding the function configuration.
pub const METAFIELD_KEY: &str = "function-configuration";

/// Shopify metafield type of the stored value.
pub const METAFIELD_TYPE: &str = "json";
