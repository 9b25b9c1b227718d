//! Errors raised while talking to the checkout host.

use thiserror::Error;

/// Errors that can occur when reading input or writing output.
///
/// These are host contract violations. The rule itself never fails: a
/// missing or unusable configuration yields an empty result instead.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid function input document.
    #[error("Invalid function input: {0}")]
    Input(#[source] serde_json::Error),

    /// The result could not be serialized.
    #[error("Failed to serialize function result: {0}")]
    Output(#[source] serde_json::Error),
}
