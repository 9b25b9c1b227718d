//! Merchant configuration for the payment reorder rule.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Configuration`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The input is not valid configuration JSON.
    #[error("configuration is not valid JSON: {0}")]
    Malformed(String),
    /// The payment method name is missing or empty.
    #[error("payment method name cannot be empty")]
    EmptyPaymentMethodName,
    /// The cart total threshold is missing, zero, or negative.
    #[error("cart total must be greater than zero (got {0})")]
    NonPositiveCartTotal(f64),
    /// The cart total threshold is NaN or infinite.
    #[error("cart total must be a finite number")]
    NonFiniteCartTotal,
}

/// Settings entered by the merchant.
///
/// Moves the first payment method whose name contains
/// [`payment_method_name`](Self::payment_method_name) to the top of the list
/// while the cart total is at most [`cart_total`](Self::cart_total).
///
/// ## Constraints
///
/// - `payment_method_name` is non-empty
/// - `cart_total` is finite and greater than zero
///
/// ## Examples
///
/// ```
/// use payment_reorder_core::Configuration;
///
/// let config = Configuration::parse(r#"{"paymentMethodName":"COD","cartTotal":100}"#);
/// assert!(config.is_ok());
///
/// assert!(Configuration::parse("{}").is_err());
/// assert!(Configuration::new("", 100.0).is_err());
/// assert!(Configuration::new("COD", 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawConfiguration")]
pub struct Configuration {
    payment_method_name: String,
    cart_total: f64,
}

/// Configuration as stored, before validation.
///
/// Missing fields default to their falsy values so that `{}` is reported as
/// an invalid configuration rather than a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfiguration {
    #[serde(default)]
    payment_method_name: Option<String>,
    #[serde(default)]
    cart_total: Option<f64>,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Self::new(
            raw.payment_method_name.unwrap_or_default(),
            raw.cart_total.unwrap_or_default(),
        )
    }
}

impl Configuration {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment method name is empty or the cart total
    /// is not a finite number greater than zero.
    pub fn new(
        payment_method_name: impl Into<String>,
        cart_total: f64,
    ) -> Result<Self, ConfigurationError> {
        let payment_method_name = payment_method_name.into();

        if payment_method_name.is_empty() {
            return Err(ConfigurationError::EmptyPaymentMethodName);
        }

        if !cart_total.is_finite() {
            return Err(ConfigurationError::NonFiniteCartTotal);
        }

        if cart_total <= 0.0 {
            return Err(ConfigurationError::NonPositiveCartTotal(cart_total));
        }

        Ok(Self {
            payment_method_name,
            cart_total,
        })
    }

    /// Parse a configuration from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Malformed`] if the text is not a JSON
    /// object with the expected field types, or a validation error if the
    /// values violate the constraints.
    pub fn parse(json: &str) -> Result<Self, ConfigurationError> {
        let raw: RawConfiguration =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Load a configuration from an optional metafield value.
    ///
    /// An absent or blank value means the merchant has not configured the
    /// rule and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but malformed or invalid.
    pub fn from_metafield(value: Option<&str>) -> Result<Option<Self>, ConfigurationError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }

    /// The payment method name (or part of it) to move to the top.
    #[must_use]
    pub fn payment_method_name(&self) -> &str {
        &self.payment_method_name
    }

    /// The largest cart total for which the payment method is moved.
    #[must_use]
    pub const fn cart_total(&self) -> f64 {
        self.cart_total
    }

    /// Serialize the configuration as the metafield JSON value.
    #[must_use]
    pub fn to_metafield_value(&self) -> String {
        serde_json::json!({
            "paymentMethodName": self.payment_method_name,
            "cartTotal": self.cart_total,
        })
        .to_string()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move \"{}\" to the top when the cart total is at most {}",
            self.payment_method_name, self.cart_total
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let config = Configuration::parse(r#"{"paymentMethodName":"COD","cartTotal":100}"#).unwrap();
        assert_eq!(config.payment_method_name(), "COD");
        assert!((config.cart_total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_fractional_threshold() {
        let config =
            Configuration::parse(r#"{"paymentMethodName":"Bank","cartTotal":49.99}"#).unwrap();
        assert!((config.cart_total() - 49.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(
            Configuration::parse("{}"),
            Err(ConfigurationError::EmptyPaymentMethodName)
        );
    }

    #[test]
    fn test_parse_zero_cart_total() {
        assert_eq!(
            Configuration::parse(r#"{"paymentMethodName":"COD","cartTotal":0}"#),
            Err(ConfigurationError::NonPositiveCartTotal(0.0))
        );
    }

    #[test]
    fn test_parse_missing_cart_total() {
        assert!(matches!(
            Configuration::parse(r#"{"paymentMethodName":"COD"}"#),
            Err(ConfigurationError::NonPositiveCartTotal(_))
        ));
    }

    #[test]
    fn test_parse_negative_cart_total() {
        assert!(matches!(
            Configuration::parse(r#"{"paymentMethodName":"COD","cartTotal":-5}"#),
            Err(ConfigurationError::NonPositiveCartTotal(_))
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            Configuration::parse("{not json"),
            Err(ConfigurationError::Malformed(_))
        ));
        assert!(matches!(
            Configuration::parse("[1, 2]"),
            Err(ConfigurationError::Malformed(_))
        ));
        assert!(matches!(
            Configuration::parse(r#"{"paymentMethodName":"COD","cartTotal":"100"}"#),
            Err(ConfigurationError::Malformed(_))
        ));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert_eq!(
            Configuration::new("COD", f64::INFINITY),
            Err(ConfigurationError::NonFiniteCartTotal)
        );
        assert_eq!(
            Configuration::new("COD", f64::NAN),
            Err(ConfigurationError::NonFiniteCartTotal)
        );
    }

    #[test]
    fn test_from_metafield_absent_or_blank() {
        assert_eq!(Configuration::from_metafield(None), Ok(None));
        assert_eq!(Configuration::from_metafield(Some("")), Ok(None));
        assert_eq!(Configuration::from_metafield(Some("   ")), Ok(None));
    }

    #[test]
    fn test_from_metafield_malformed() {
        assert!(matches!(
            Configuration::from_metafield(Some("{\"paymentMethodName\":")),
            Err(ConfigurationError::Malformed(_))
        ));
        assert!(matches!(
            Configuration::from_metafield(Some("null")),
            Err(ConfigurationError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_metafield_valid() {
        let config =
            Configuration::from_metafield(Some(r#" {"paymentMethodName":"COD","cartTotal":100} "#))
                .unwrap()
                .unwrap();
        assert_eq!(config.payment_method_name(), "COD");
    }

    #[test]
    fn test_metafield_value_parses_back() {
        let config = Configuration::new("Cash on Delivery", 75.5).unwrap();
        let stored = config.to_metafield_value();
        assert!(stored.contains("\"paymentMethodName\":\"Cash on Delivery\""));
        assert_eq!(Configuration::parse(&stored).unwrap(), config);
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let result: Result<Configuration, _> =
            serde_json::from_str(r#"{"paymentMethodName":"","cartTotal":10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let config = Configuration::new("COD", 100.0).unwrap();
        assert_eq!(
            config.to_string(),
            "move \"COD\" to the top when the cart total is at most 100"
        );
    }
}
