//! Payment Reorder Core - Shared types library.
//!
//! This crate provides the types shared by all payment reorder components:
//! - `function` - The checkout rule that moves a payment method to the top
//! - `admin` - Backend that registers the customization with Shopify
//! - `cli` - Command-line tools for previewing and creating customizations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Both the
//! admin backend (which writes the configuration metafield) and the function
//! (which reads it) go through [`Configuration`], so the stored JSON has
//! exactly one schema.
//!
//! # Modules
//!
//! - [`types`] - Merchant configuration, metafield location, and Shopify GIDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
