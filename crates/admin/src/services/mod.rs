//! Business logic services for admin.
//!
//! # Services
//!
//! - `payment_customization` - Create-then-configure protocol for customizations

pub mod payment_customization;

pub use payment_customization::{
    InvalidPaymentCustomization, NewPaymentCustomization, create_payment_customization,
};
