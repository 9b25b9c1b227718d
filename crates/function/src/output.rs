//! Function result document.

use payment_reorder_core::PaymentMethodId;
use serde::{Deserialize, Serialize};

/// Operations for the host to apply to the payment method list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    /// Zero or one operations.
    pub operations: Vec<Operation>,
}

impl FunctionResult {
    /// A result that leaves the checkout untouched.
    #[must_use]
    pub const fn no_changes() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// A result holding a single operation.
    #[must_use]
    pub fn single(operation: Operation) -> Self {
        Self {
            operations: vec![operation],
        }
    }

    /// Whether the result leaves the checkout untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A checkout mutation.
///
/// Serialized externally tagged, e.g. `{"move": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Move a payment method to a new position.
    Move(MoveOperation),
}

/// Move a payment method to `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOperation {
    /// Target position, `0` is the top of the list.
    pub index: u32,
    /// Payment method to move.
    pub payment_method_id: PaymentMethodId,
}

impl Operation {
    /// Move `payment_method_id` to the top of the list.
    #[must_use]
    pub const fn move_to_top(payment_method_id: PaymentMethodId) -> Self {
        Self::Move(MoveOperation {
            index: 0,
            payment_method_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_serialization() {
        let result = FunctionResult::single(Operation::move_to_top(PaymentMethodId::new("gid://2")));
        let json = serde_json::to_value(&result).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "operations": [{ "move": { "index": 0, "paymentMethodId": "gid://2" } }]
            })
        );
    }

    #[test]
    fn test_no_changes_serialization() {
        let json = serde_json::to_string(&FunctionResult::no_changes()).unwrap_or_default();
        assert_eq!(json, r#"{"operations":[]}"#);
        assert!(FunctionResult::default().is_empty());
    }
}
