//! Persistence boundary for pages.
//!
//! The builder never owns a process-wide page collection: callers pass a
//! store handle explicitly (request-scoped server state, a test fixture,
//! a future database-backed implementation). The in-memory store here is
//! the reference implementation and what the CLI/tests use.

pub mod memory;

pub use memory::MemoryPageStore;

use pagesmith_core::{Handle, PageId, ShopDomain};

use crate::model::Page;

/// Errors from page persistence.
///
/// Always kept separate from publish errors so callers can tell "saved
/// locally, not yet published" apart from "not even saved".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No page with this id exists for the shop.
    #[error("page not found: {0}")]
    NotFound(PageId),

    /// The caller's copy is stale: its version token no longer matches
    /// the stored page. The caller must reload and re-apply its edits
    /// rather than silently overwrite.
    #[error("version conflict: caller has version {caller}, store has {stored}")]
    Conflict { caller: u64, stored: u64 },

    /// Another page in the same shop already uses this handle.
    #[error("handle already in use: {0}")]
    DuplicateHandle(Handle),
}

/// Where pages live between edit sessions.
///
/// `save_page` must be idempotent under retry: re-saving an unchanged
/// page is a no-op that returns the stored copy without bumping the
/// version.
#[allow(async_fn_in_trait)]
pub trait PageStore: Send + Sync {
    /// Load a page by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the page does not exist.
    async fn load_page(&self, shop: &ShopDomain, id: PageId) -> Result<Page, StoreError>;

    /// Save a page, returning the stored copy (with its bumped version
    /// and refreshed `updated_at`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the page's version token is
    /// stale and [`StoreError::DuplicateHandle`] when another page in
    /// the shop claims the same handle.
    async fn save_page(&self, shop: &ShopDomain, page: Page) -> Result<Page, StoreError>;

    /// Delete a page. Terminal: there is no undelete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the page does not exist.
    async fn delete_page(&self, shop: &ShopDomain, id: PageId) -> Result<(), StoreError>;

    /// List all pages for a shop, most recently updated first.
    async fn list_pages(&self, shop: &ShopDomain) -> Result<Vec<Page>, StoreError>;
}
