//! CLI subcommands.

pub mod customization;
pub mod run;
