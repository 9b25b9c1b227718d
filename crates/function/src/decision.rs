//! The payment reorder rule.
//!
//! Outcomes are checked in a fixed order: configuration, threshold, match.

use payment_reorder_core::{Configuration, PaymentMethodId};

use crate::input::{FunctionInput, PaymentMethod};
use crate::output::{FunctionResult, Operation};

/// Why the rule did or did not act.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// No usable configuration on the customization.
    ConfigurationAbsent,
    /// The cart total is above the configured threshold.
    ThresholdExceeded {
        /// Cart total read from the input.
        cart_total: f64,
        /// Configured threshold.
        threshold: f64,
    },
    /// No payment method name contains the configured text.
    NoMatchingMethod,
    /// Move the matched method to the top.
    MoveToTop(PaymentMethodId),
}

impl Decision {
    /// Convert the decision into the operations sent back to the host.
    #[must_use]
    pub fn into_result(self) -> FunctionResult {
        match self {
            Self::MoveToTop(id) => FunctionResult::single(Operation::move_to_top(id)),
            Self::ConfigurationAbsent | Self::ThresholdExceeded { .. } | Self::NoMatchingMethod => {
                FunctionResult::no_changes()
            }
        }
    }
}

/// Decide what to do for a checkout snapshot.
#[must_use]
pub fn decide(input: &FunctionInput) -> Decision {
    let Some(config) = input.configuration() else {
        return Decision::ConfigurationAbsent;
    };

    evaluate(&config, input.cart.total_amount(), &input.payment_methods)
}

/// Apply the rule to an already loaded configuration.
///
/// The threshold is inclusive: a cart total equal to the configured value
/// still moves the payment method.
#[must_use]
pub fn evaluate(
    config: &Configuration,
    cart_total: f64,
    payment_methods: &[PaymentMethod],
) -> Decision {
    if cart_total > config.cart_total() {
        tracing::debug!(
            cart_total,
            threshold = config.cart_total(),
            "Cart total above threshold, leaving payment methods unchanged"
        );
        return Decision::ThresholdExceeded {
            cart_total,
            threshold: config.cart_total(),
        };
    }

    // Case-sensitive substring match; the first method in host order wins.
    payment_methods
        .iter()
        .find(|method| method.name.contains(config.payment_method_name()))
        .map_or(Decision::NoMatchingMethod, |method| {
            Decision::MoveToTop(method.id.clone())
        })
}

/// Run the rule and return the operations for the host.
#[must_use]
pub fn run(input: &FunctionInput) -> FunctionResult {
    decide(input).into_result()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn method(id: &str, name: &str) -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new(id),
            name: name.to_string(),
        }
    }

    fn methods() -> Vec<PaymentMethod> {
        vec![
            method("gid://1", "Credit Card"),
            method("gid://2", "Cash on Delivery (COD)"),
        ]
    }

    fn cod(threshold: f64) -> Configuration {
        Configuration::new("COD", threshold).unwrap()
    }

    #[test]
    fn test_moves_matching_method_below_threshold() {
        assert_eq!(
            evaluate(&cod(100.0), 50.0, &methods()),
            Decision::MoveToTop(PaymentMethodId::new("gid://2"))
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(
            evaluate(&cod(100.0), 100.0, &methods()),
            Decision::MoveToTop(PaymentMethodId::new("gid://2"))
        );
    }

    #[test]
    fn test_above_threshold_does_nothing() {
        assert_eq!(
            evaluate(&cod(100.0), 100.01, &methods()),
            Decision::ThresholdExceeded {
                cart_total: 100.01,
                threshold: 100.0,
            }
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            evaluate(&Configuration::new("PayPal", 100.0).unwrap(), 10.0, &methods()),
            Decision::NoMatchingMethod
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(
            evaluate(&Configuration::new("cod", 100.0).unwrap(), 10.0, &methods()),
            Decision::NoMatchingMethod
        );
    }

    #[test]
    fn test_first_match_wins() {
        let methods = vec![
            method("gid://1", "Credit Card"),
            method("gid://2", "COD - Express"),
            method("gid://3", "COD - Standard"),
        ];
        assert_eq!(
            evaluate(&cod(100.0), 10.0, &methods),
            Decision::MoveToTop(PaymentMethodId::new("gid://2"))
        );
    }

    #[test]
    fn test_empty_payment_methods() {
        assert_eq!(
            evaluate(&cod(100.0), 10.0, &[]),
            Decision::NoMatchingMethod
        );
    }

    #[test]
    fn test_decision_into_result() {
        assert!(Decision::ConfigurationAbsent.into_result().is_empty());
        assert!(Decision::NoMatchingMethod.into_result().is_empty());
        assert!(
            Decision::ThresholdExceeded {
                cart_total: 2.0,
                threshold: 1.0
            }
            .into_result()
            .is_empty()
        );
        assert_eq!(
            Decision::MoveToTop(PaymentMethodId::new("gid://9"))
                .into_result()
                .operations
                .len(),
            1
        );
    }

    #[test]
    fn test_decide_without_configuration() {
        let input: FunctionInput = serde_json::from_value(serde_json::json!({
            "cart": { "cost": { "totalAmount": { "amount": "1.00" } } },
            "paymentMethods": [{ "id": "gid://2", "name": "COD" }]
        }))
        .unwrap();
        assert_eq!(decide(&input), Decision::ConfigurationAbsent);
        assert!(run(&input).is_empty());
    }
}
