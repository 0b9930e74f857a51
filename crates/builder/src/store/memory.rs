//! In-memory page store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use pagesmith_core::{PageId, ShopDomain};

use crate::model::Page;

use super::{PageStore, StoreError};

/// In-process page store keyed by shop, then page id.
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageStore {
    inner: Arc<RwLock<HashMap<ShopDomain, HashMap<PageId, Page>>>>,
}

impl MemoryPageStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages stored for a shop.
    pub async fn page_count(&self, shop: &ShopDomain) -> usize {
        self.inner
            .read()
            .await
            .get(shop)
            .map_or(0, HashMap::len)
    }
}

impl PageStore for MemoryPageStore {
    async fn load_page(&self, shop: &ShopDomain, id: PageId) -> Result<Page, StoreError> {
        self.inner
            .read()
            .await
            .get(shop)
            .and_then(|pages| pages.get(&id))
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn save_page(&self, shop: &ShopDomain, page: Page) -> Result<Page, StoreError> {
        let mut shops = self.inner.write().await;
        let pages = shops.entry(shop.clone()).or_default();

        if pages
            .values()
            .any(|other| other.id != page.id && other.handle == page.handle)
        {
            return Err(StoreError::DuplicateHandle(page.handle));
        }

        if let Some(existing) = pages.get(&page.id) {
            if existing.version != page.version {
                return Err(StoreError::Conflict {
                    caller: page.version,
                    stored: existing.version,
                });
            }

            // Idempotent retry: identical payload saves nothing and
            // keeps the version token stable
            if existing.title == page.title
                && existing.handle == page.handle
                && existing.status == page.status
                && existing.content == page.content
                && existing.remote == page.remote
            {
                tracing::debug!(page_id = %page.id, "save is a no-op, returning stored copy");
                return Ok(existing.clone());
            }
        }

        let mut saved = page;
        saved.version += 1;
        saved.updated_at = Utc::now();
        tracing::debug!(page_id = %saved.id, version = saved.version, "page saved");
        pages.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete_page(&self, shop: &ShopDomain, id: PageId) -> Result<(), StoreError> {
        let mut shops = self.inner.write().await;
        let removed = shops
            .get_mut(shop)
            .and_then(|pages| pages.remove(&id));
        if removed.is_none() {
            return Err(StoreError::NotFound(id));
        }
        tracing::debug!(page_id = %id, "page deleted");
        Ok(())
    }

    async fn list_pages(&self, shop: &ShopDomain) -> Result<Vec<Page>, StoreError> {
        let mut pages: Vec<Page> = self
            .inner
            .read()
            .await
            .get(shop)
            .map(|pages| pages.values().cloned().collect())
            .unwrap_or_default();
        pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(pages)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pagesmith_core::Handle;

    fn shop() -> ShopDomain {
        ShopDomain::new("demo.myshopify.com")
    }

    fn page(title: &str) -> Page {
        Page::new(title, Handle::from_title(title))
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let store = MemoryPageStore::new();
        let saved = store.save_page(&shop(), page("About")).await.unwrap();
        assert_eq!(saved.version, 1);

        let loaded = store.load_page(&shop(), saved.id).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_load_missing_page() {
        let store = MemoryPageStore::new();
        let err = store.load_page(&shop(), PageId::generate()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stale_version_conflicts() {
        let store = MemoryPageStore::new();
        let original = page("About");
        let stale = original.clone();

        let mut saved = store.save_page(&shop(), original).await.unwrap();
        saved.title = "About Us".to_owned();
        store.save_page(&shop(), saved).await.unwrap();

        // stale copy still carries version 0
        let err = store.save_page(&shop(), stale).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Conflict { caller: 0, stored: 2 }
        ));
    }

    #[tokio::test]
    async fn test_identical_save_is_idempotent() {
        let store = MemoryPageStore::new();
        let saved = store.save_page(&shop(), page("About")).await.unwrap();

        let resaved = store.save_page(&shop(), saved.clone()).await.unwrap();
        assert_eq!(resaved.version, saved.version, "no version bump on retry");
        assert_eq!(store.page_count(&shop()).await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_handle_rejected() {
        let store = MemoryPageStore::new();
        store.save_page(&shop(), page("About")).await.unwrap();

        let err = store.save_page(&shop(), page("About")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateHandle(_)));
    }

    #[tokio::test]
    async fn test_same_handle_across_shops_is_fine() {
        let store = MemoryPageStore::new();
        let other_shop = ShopDomain::new("other.myshopify.com");

        store.save_page(&shop(), page("About")).await.unwrap();
        assert!(store.save_page(&other_shop, page("About")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_is_terminal() {
        let store = MemoryPageStore::new();
        let saved = store.save_page(&shop(), page("About")).await.unwrap();

        store.delete_page(&shop(), saved.id).await.unwrap();
        assert!(matches!(
            store.load_page(&shop(), saved.id).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
        assert!(matches!(
            store.delete_page(&shop(), saved.id).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_orders_by_recency() {
        let store = MemoryPageStore::new();
        let first = store.save_page(&shop(), page("First")).await.unwrap();
        let mut second = store.save_page(&shop(), page("Second")).await.unwrap();

        // update the second page so it is most recent
        second.title = "Second v2".to_owned();
        let second = store.save_page(&shop(), second).await.unwrap();

        let pages = store.list_pages(&shop()).await.unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, second.id);
        assert_eq!(pages[1].id, first.id);
    }
}
