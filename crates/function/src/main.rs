//! Payment reorder function binary.
//!
//! Reads the function input document from stdin and writes the result
//! document to stdout, which is how the checkout host invokes functions.
//! Diagnostics go to stderr; set `RUST_LOG=payment_reorder_function=debug`
//! to see why a run produced no operations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{Read, Write};

use payment_reorder_function::{FunctionError, run_json};

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "payment_reorder_function=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute() {
        tracing::error!("Function run failed: {e}");
        std::process::exit(1);
    }
}

fn execute() -> Result<(), FunctionError> {
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;

    let output = run_json(&input)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
