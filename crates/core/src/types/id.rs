//! Newtype IDs for Shopify global IDs.
//!
//! Shopify identifies every object with an opaque global ID string such as
//! `gid://shopify/PaymentCustomization/1`. Use the `define_gid!` macro to
//! create wrappers that keep IDs of different object types apart.

/// Macro to define a type-safe Shopify global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use payment_reorder_core::define_gid;
/// define_gid!(OrderGid);
/// define_gid!(ProductGid);
///
/// let order = OrderGid::new("gid://shopify/Order/1");
/// let product = ProductGid::new("gid://shopify/Product/1");
///
/// // These are different types, so this won't compile:
/// // let _: OrderGid = product;
/// # let _ = (order, product);
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its string form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying ID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the ID string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_gid!(PaymentMethodId);
define_gid!(FunctionId);
define_gid!(PaymentCustomizationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gid_serializes_transparently() {
        let id = PaymentMethodId::new("gid://shopify/PaymentCustomizationPaymentMethod/2");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"gid://shopify/PaymentCustomizationPaymentMethod/2\"");
    }

    #[test]
    fn test_gid_display_matches_inner() {
        let id = FunctionId::from("01HXYZ");
        assert_eq!(id.to_string(), "01HXYZ");
        assert_eq!(id.as_str(), "01HXYZ");
        assert_eq!(String::from(id), "01HXYZ");
    }
}
