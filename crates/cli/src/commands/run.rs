//! Function preview command.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate the function against a saved input document
//! pr-cli run --input fixtures/cod.json
//!
//! # Or pipe the document in
//! cat fixtures/cod.json | pr-cli run
//! ```

use std::io::Read;
use std::path::Path;

use payment_reorder_function::{Decision, FunctionInput, decide};
use thiserror::Error;

/// Errors that can occur while previewing a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The input file or stdin could not be read.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a function input document.
    #[error("Invalid function input: {0}")]
    Input(#[source] serde_json::Error),

    /// The result could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Output(#[source] serde_json::Error),
}

/// Evaluate the function and return the pretty-printed result document.
///
/// The reason behind the result is logged at `info`.
pub fn preview(input: Option<&Path>) -> Result<String, RunError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    let input: FunctionInput = serde_json::from_str(&raw).map_err(RunError::Input)?;
    let decision = decide(&input);
    log_decision(&decision);

    serde_json::to_string_pretty(&decision.into_result()).map_err(RunError::Output)
}

fn log_decision(decision: &Decision) {
    match decision {
        Decision::ConfigurationAbsent => {
            tracing::info!("No usable configuration, payment methods unchanged");
        }
        Decision::ThresholdExceeded {
            cart_total,
            threshold,
        } => tracing::info!("Cart total {cart_total} is above {threshold}, payment methods unchanged"),
        Decision::NoMatchingMethod => {
            tracing::info!("No payment method matches, payment methods unchanged");
        }
        Decision::MoveToTop(id) => tracing::info!("Moving {id} to the top"),
    }
}
