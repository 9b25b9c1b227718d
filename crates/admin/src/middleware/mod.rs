//! HTTP middleware and extractors for admin.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, HTTP transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Shop session extractor (per handler)

pub mod shop_session;

pub use shop_session::{CurrentShop, SHOP_DOMAIN_HEADER};
