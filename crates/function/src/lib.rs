//! Payment reorder function.
//!
//! The checkout host invokes this function once per payment method
//! evaluation with a JSON snapshot of the cart, the available payment
//! methods, and the customization's configuration metafield. The function
//! answers with a list of operations for the host to apply.
//!
//! # Rule
//!
//! When a configuration is present and the cart total is at most the
//! configured threshold, the first payment method whose name contains the
//! configured text is moved to the top of the list. Every other case
//! produces no operations.
//!
//! # Example
//!
//! ```rust
//! use payment_reorder_function::run_json;
//!
//! let input = r#"{
//!     "cart": { "cost": { "totalAmount": { "amount": "50.00" } } },
//!     "paymentMethods": [
//!         { "id": "gid://1", "name": "Credit Card" },
//!         { "id": "gid://2", "name": "Cash on Delivery (COD)" }
//!     ],
//!     "paymentCustomization": {
//!         "metafield": { "value": "{\"paymentMethodName\":\"COD\",\"cartTotal\":100}" }
//!     }
//! }"#;
//!
//! let output = run_json(input).unwrap();
//! assert_eq!(
//!     output,
//!     r#"{"operations":[{"move":{"index":0,"paymentMethodId":"gid://2"}}]}"#
//! );
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod decision;
pub mod error;
pub mod input;
pub mod output;

pub use decision::{Decision, decide, evaluate, run};
pub use error::FunctionError;
pub use input::{
    Amount, Cart, CartCost, FunctionInput, Metafield, Money, PaymentCustomization, PaymentMethod,
};
pub use output::{FunctionResult, MoveOperation, Operation};

/// Run the function on a serialized input and serialize the result.
///
/// # Errors
///
/// Returns [`FunctionError::Input`] if the input does not match the input
/// schema. Configuration problems are not errors; they produce an empty
/// operation list.
pub fn run_json(input: &str) -> Result<String, FunctionError> {
    let input: FunctionInput = serde_json::from_str(input).map_err(FunctionError::Input)?;
    let result = run(&input);
    serde_json::to_string(&result).map_err(FunctionError::Output)
}
