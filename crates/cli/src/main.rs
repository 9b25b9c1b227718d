//! Payment Reorder CLI - Function preview and customization setup.
//!
//! # Usage
//!
//! ```bash
//! # Preview the function against an input document
//! pr-cli run --input fixtures/cod.json
//!
//! # Create a payment customization on the configured store
//! pr-cli customization create --function-id 01HX... --payment-method COD --cart-total 100
//! ```
//!
//! # Commands
//!
//! - `run` - Evaluate the function locally
//! - `customization create` - Create and configure a customization

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pr-cli")]
#[command(author, version, about = "Payment reorder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the function against an input document
    Run {
        /// Input document path (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Manage payment customizations
    Customization {
        #[command(subcommand)]
        action: CustomizationAction,
    },
}

#[derive(Subcommand)]
enum CustomizationAction {
    /// Create a payment customization and store its configuration
    Create {
        /// Deployed function ID
        #[arg(short, long)]
        function_id: String,

        /// Payment method name (or part of it) to move to the top
        #[arg(short, long)]
        payment_method: String,

        /// Largest cart total for which the method is moved
        #[arg(short, long)]
        cart_total: f64,
    },
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pr_cli=info,payment_reorder_admin=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run { input } => {
            let output = commands::run::preview(input.as_deref())?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}")?;
        }
        Commands::Customization { action } => match action {
            CustomizationAction::Create {
                function_id,
                payment_method,
                cart_total,
            } => {
                let customization =
                    commands::customization::create(&function_id, &payment_method, cart_total)
                        .await?;
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", customization.id)?;
            }
        },
    }
    Ok(())
}
