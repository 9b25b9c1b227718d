//! Payment Reorder Admin library.
//!
//! This crate provides the admin backend as a library, allowing it to be
//! tested in-process and reused by the CLI.
//!
//! # Security
//!
//! This crate holds HIGH PRIVILEGE access to the Shopify Admin API. Bind it
//! to a private interface or put it behind the app proxy.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;
