//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_uuid_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. Builder
//! IDs are UUIDs generated at creation time and stable for the entity's
//! lifetime.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe UUID-backed ID wrapper.
///
/// Creates a newtype wrapper around `uuid::Uuid` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - `generate()` for fresh v4 IDs, `as_uuid()` accessor
/// - `From<Uuid>` and `Into<Uuid>` implementations
///
/// # Example
///
/// ```rust
/// # use pagesmith_core::define_uuid_id;
/// define_uuid_id!(PageId);
/// define_uuid_id!(ElementId);
///
/// let page_id = PageId::generate();
/// let element_id = ElementId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: PageId = element_id;
/// ```
#[macro_export]
macro_rules! define_uuid_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a fresh random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[must_use]
            pub const fn new(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID value.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_uuid_id!(PageId);
define_uuid_id!(ElementId);

/// A Shopify shop domain (e.g. `my-store.myshopify.com`).
///
/// Used to scope page storage per shop; the builder never assumes a
/// single-shop process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Create a shop domain from a string.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into())
    }

    /// Returns the domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShopDomain {
    fn from(domain: &str) -> Self {
        Self(domain.to_owned())
    }
}

/// The identifier Shopify assigns to a published page.
///
/// Distinct from [`PageId`]: the local id names our editable copy, the
/// remote id names Shopify's rendered copy. The two are reconciled on
/// every publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemotePageId(i64);

impl RemotePageId {
    /// Create a remote page ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RemotePageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RemotePageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ElementId::generate();
        let b = ElementId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = PageId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));

        let parsed: PageId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_shop_domain_display() {
        let shop = ShopDomain::new("demo.myshopify.com");
        assert_eq!(shop.to_string(), "demo.myshopify.com");
        assert_eq!(shop.as_str(), "demo.myshopify.com");
    }

    #[test]
    fn test_remote_page_id_roundtrip() {
        let id = RemotePageId::new(108_828_309);
        assert_eq!(id.as_i64(), 108_828_309);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "108828309");
    }
}
