//! Save/publish orchestration.
//!
//! [`PageService`] is the one place that touches both the store and the
//! publish boundary. It serializes work per page: a save that arrives
//! while another save or publish of the same page is in flight queues
//! behind it instead of racing.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use pagesmith_core::{PageId, PageStatus, ShopDomain};

use crate::catalog::WidgetCatalog;
use crate::model::{Page, RemotePage};
use crate::serialize;
use crate::shopify::{PublishError, PublishRequest, Publisher};
use crate::store::{PageStore, StoreError};

/// Errors from service operations.
///
/// Save and publish failures stay separate variants: after a failed
/// publish the page is still safely saved as a draft, and callers
/// surface that differently from a failed save.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Save(#[from] StoreError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Orchestrates page persistence and publishing.
pub struct PageService<S, P> {
    store: S,
    publisher: P,
    catalog: WidgetCatalog,
    locks: Mutex<HashMap<PageId, Arc<Mutex<()>>>>,
}

impl<S: PageStore, P: Publisher> PageService<S, P> {
    /// Create a service over a store and publisher, rendering with the
    /// given catalog.
    pub fn new(store: S, publisher: P, catalog: WidgetCatalog) -> Self {
        Self {
            store,
            publisher,
            catalog,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The catalog this service renders with.
    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    /// Acquire the per-page lock, creating it on first use.
    async fn lock_page(&self, id: PageId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(id).or_default())
        };
        lock.lock_owned().await
    }

    /// Load a page.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Save`] wrapping the store error.
    pub async fn load(&self, shop: &ShopDomain, id: PageId) -> Result<Page, ServiceError> {
        Ok(self.store.load_page(shop, id).await?)
    }

    /// Save a page, queueing behind any in-flight save or publish of the
    /// same page.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Save`] on version conflicts, duplicate
    /// handles, or a missing page.
    pub async fn save(&self, shop: &ShopDomain, page: Page) -> Result<Page, ServiceError> {
        let _guard = self.lock_page(page.id).await;
        Ok(self.store.save_page(shop, page).await?)
    }

    /// Delete a page.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Save`] if the page does not exist.
    pub async fn delete(&self, shop: &ShopDomain, id: PageId) -> Result<(), ServiceError> {
        let _guard = self.lock_page(id).await;
        self.store.delete_page(shop, id).await?;
        // The page is gone for good; drop its lock entry so the map does
        // not grow with every page ever touched
        self.locks.lock().await.remove(&id);
        Ok(())
    }

    /// List a shop's pages, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Save`] wrapping the store error.
    pub async fn list(&self, shop: &ShopDomain) -> Result<Vec<Page>, ServiceError> {
        Ok(self.store.list_pages(shop).await?)
    }

    /// Publish a page: serialize its current content, push it to the
    /// platform, then record the published status and remote identity
    /// locally.
    ///
    /// A failed publish leaves the local page untouched (still a draft,
    /// still saved); the returned error says which side failed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Save`] if the page cannot be loaded or the
    /// post-publish save fails, [`ServiceError::Publish`] if the platform
    /// rejects the push.
    pub async fn publish(&self, shop: &ShopDomain, id: PageId) -> Result<Page, ServiceError> {
        let _guard = self.lock_page(id).await;

        let page = self.store.load_page(shop, id).await?;
        let body_html = serialize::serialize(&page, &self.catalog);

        let receipt = self
            .publisher
            .publish_page(PublishRequest {
                title: &page.title,
                handle: &page.handle,
                body_html: &body_html,
                remote_id: page.remote.as_ref().map(|remote| remote.id),
            })
            .await?;

        tracing::info!(page_id = %id, url = %receipt.url, "page published");

        let mut published = page;
        published.status = PageStatus::Published;
        published.remote = Some(RemotePage {
            id: receipt.remote_id,
            url: receipt.url,
        });
        Ok(self.store.save_page(shop, published).await?)
    }
}

impl From<ServiceError> for crate::error::BuilderError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Save(e) => Self::Store(e),
            ServiceError::Publish(e) => Self::Publish(e),
        }
    }
}
