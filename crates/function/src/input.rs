//! Function input document.
//!
//! Mirrors the fields selected by the function's input query:
//!
//! ```graphql
//! query RunInput {
//!   cart { cost { totalAmount { amount } } }
//!   paymentMethods { id name }
//!   paymentCustomization {
//!     metafield(namespace: "$app:payment-customization", key: "function-configuration") {
//!       value
//!     }
//!   }
//! }
//! ```
//!
//! Every field is optional on the wire. Missing or `null` pieces fall back
//! to empty values so that the rule degrades to "no operations" instead of
//! failing.

use payment_reorder_core::{Configuration, PaymentMethodId};
use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Snapshot of the checkout supplied by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInput {
    /// Cart being checked out.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cart: Cart,
    /// Payment methods in the order the host will display them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_methods: Vec<PaymentMethod>,
    /// The customization record that owns this function run.
    #[serde(default)]
    pub payment_customization: Option<PaymentCustomization>,
}

impl FunctionInput {
    /// Raw configuration metafield value, if the host sent one.
    #[must_use]
    pub fn metafield_value(&self) -> Option<&str> {
        self.payment_customization
            .as_ref()
            .and_then(|c| c.metafield.as_ref())
            .map(|m| m.value.as_str())
    }

    /// Load the merchant configuration from the metafield.
    ///
    /// Returns `None` when the metafield is absent or does not hold a valid
    /// configuration. Invalid values are logged; they never fail the run.
    #[must_use]
    pub fn configuration(&self) -> Option<Configuration> {
        Configuration::from_metafield(self.metafield_value()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unusable payment customization configuration");
            None
        })
    }
}

/// Cart fields read by the rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cost breakdown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cost: CartCost,
}

impl Cart {
    /// Total amount of the cart as a float.
    ///
    /// Falls back to `0.0` when the amount is missing or not a number.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.cost
            .total_amount
            .as_ref()
            .and_then(Money::to_f64)
            .unwrap_or(0.0)
    }
}

/// Cart cost breakdown.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    /// Total amount including taxes and discounts.
    #[serde(default)]
    pub total_amount: Option<Money>,
}

/// A monetary amount.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Money {
    /// Decimal amount, usually sent as a string such as `"19.99"`.
    #[serde(default)]
    pub amount: Option<Amount>,
}

impl Money {
    /// Parse the amount as a float.
    ///
    /// Overflowing amounts parse as infinity and stay above any threshold;
    /// only NaN counts as unparseable.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self.amount.as_ref()? {
            Amount::Text(text) => text.trim().parse::<f64>().ok(),
            Amount::Number(number) => Some(*number),
        }
        .filter(|amount| !amount.is_nan())
    }
}

/// Shopify `Decimal` scalar. Strings are canonical; bare numbers are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Decimal string.
    Text(String),
    /// JSON number.
    Number(f64),
}

/// A payment method offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentMethod {
    /// Host identifier used to address the method in operations.
    pub id: PaymentMethodId,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Customization record fields read by the rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentCustomization {
    /// Configuration metafield.
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

/// A metafield value.
#[derive(Debug, Clone, Deserialize)]
pub struct Metafield {
    /// Raw JSON text.
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cart(amount: serde_json::Value) -> Cart {
        serde_json::from_value(serde_json::json!({
            "cost": { "totalAmount": { "amount": amount } }
        }))
        .unwrap()
    }

    #[test]
    fn test_total_amount_from_decimal_string() {
        assert!((cart(serde_json::json!("150.25")).total_amount() - 150.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_amount_from_number() {
        assert!((cart(serde_json::json!(42)).total_amount() - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_amount_defaults_to_zero() {
        assert!(cart(serde_json::json!("not a number")).total_amount().abs() < f64::EPSILON);
        assert!(cart(serde_json::json!(null)).total_amount().abs() < f64::EPSILON);
        assert!(Cart::default().total_amount().abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_amount_overflow_is_infinite() {
        assert!(cart(serde_json::json!("1e400")).total_amount().is_infinite());
        assert!(cart(serde_json::json!("Infinity")).total_amount().is_infinite());
        assert!(cart(serde_json::json!("NaN")).total_amount().abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_fields_fall_back_to_empty() {
        let input: FunctionInput = serde_json::from_value(serde_json::json!({
            "cart": null,
            "paymentMethods": null,
            "paymentCustomization": null
        }))
        .unwrap();
        assert!(input.payment_methods.is_empty());
        assert!(input.cart.total_amount().abs() < f64::EPSILON);

        let input: FunctionInput = serde_json::from_value(serde_json::json!({
            "cart": { "cost": null },
            "paymentMethods": [{ "id": "gid://1", "name": null }]
        }))
        .unwrap();
        assert_eq!(
            input.payment_methods.first().map(|m| m.name.as_str()),
            Some("")
        );
    }

    #[test]
    fn test_empty_document_parses() {
        let input: FunctionInput = serde_json::from_str("{}").unwrap();
        assert!(input.payment_methods.is_empty());
        assert!(input.metafield_value().is_none());
        assert!(input.configuration().is_none());
    }

    #[test]
    fn test_configuration_from_metafield() {
        let input: FunctionInput = serde_json::from_value(serde_json::json!({
            "paymentCustomization": {
                "metafield": { "value": "{\"paymentMethodName\":\"COD\",\"cartTotal\":100}" }
            }
        }))
        .unwrap();
        let config = input.configuration().unwrap();
        assert_eq!(config.payment_method_name(), "COD");
    }

    #[test]
    fn test_malformed_metafield_is_absent() {
        let input: FunctionInput = serde_json::from_value(serde_json::json!({
            "paymentCustomization": { "metafield": { "value": "{oops" } }
        }))
        .unwrap();
        assert_eq!(input.metafield_value(), Some("{oops"));
        assert!(input.configuration().is_none());
    }

    #[test]
    fn test_null_customization_is_absent() {
        let input: FunctionInput = serde_json::from_value(serde_json::json!({
            "paymentCustomization": null
        }))
        .unwrap();
        assert!(input.configuration().is_none());
    }
}
