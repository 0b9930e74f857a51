//! Publish boundary: pushing serialized pages to the storefront platform.
//!
//! Publishing is always distinct from saving. The [`Publisher`] trait is
//! what the page service consumes; [`ShopifyPagesClient`] is the real
//! implementation against the Admin REST Pages API, and tests substitute
//! their own.

mod pages;

pub use pages::ShopifyPagesClient;

use pagesmith_core::{Handle, RemotePageId};

/// Errors from the publish boundary.
///
/// Never merged with [`StoreError`](crate::store::StoreError): a page
/// can be saved locally even when the remote publish fails, and callers
/// must be able to surface that distinction.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// HTTP transport failed (network unreachable, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify rejected the request.
    #[error("Shopify API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The admin token was missing, malformed, or rejected.
    #[error("not authenticated with Shopify")]
    Unauthenticated,

    /// Shopify's response could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// One publish request: the complete serialized body plus the page
/// metadata Shopify needs.
#[derive(Debug, Clone)]
pub struct PublishRequest<'a> {
    pub title: &'a str,
    pub handle: &'a Handle,
    pub body_html: &'a str,
    /// Shopify's id for a previously published copy; `Some` updates in
    /// place, `None` creates.
    pub remote_id: Option<RemotePageId>,
}

/// Shopify's acknowledgement of a publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReceipt {
    pub remote_id: RemotePageId,
    pub url: String,
}

/// The external platform that owns the published copy of a page.
#[allow(async_fn_in_trait)]
pub trait Publisher: Send + Sync {
    /// Push a serialized page, returning the platform's canonical id and
    /// URL for it.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`]; the caller's local copy is unaffected
    /// either way.
    async fn publish_page(
        &self,
        request: PublishRequest<'_>,
    ) -> Result<PublishReceipt, PublishError>;
}
