//! Core types for payment reorder.

pub mod configuration;
pub mod id;
pub mod metafield;

pub use configuration::{Configuration, ConfigurationError};
pub use id::*;
pub use metafield::{METAFIELD_KEY, METAFIELD_NAMESPACE, METAFIELD_TYPE};
