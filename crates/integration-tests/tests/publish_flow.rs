//! Integration tests for save/publish orchestration.
//!
//! These run the real [`PageService`] against the in-memory store and
//! stub publishers; no live Shopify store is involved.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use tokio::sync::Mutex;

use pagesmith_builder::catalog::WidgetCatalog;
use pagesmith_builder::serialize;
use pagesmith_builder::service::{PageService, ServiceError};
use pagesmith_builder::shopify::{PublishError, PublishReceipt, PublishRequest, Publisher};
use pagesmith_builder::store::{MemoryPageStore, StoreError};
use pagesmith_core::{PageStatus, RemotePageId};
use pagesmith_integration_tests::{demo_shop, sample_page};

/// Accepts every publish and remembers the bodies it was handed.
#[derive(Default)]
struct StubShopify {
    bodies: Arc<Mutex<Vec<String>>>,
}

impl StubShopify {
    fn with_log() -> (Self, Arc<Mutex<Vec<String>>>) {
        let bodies = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                bodies: Arc::clone(&bodies),
            },
            bodies,
        )
    }
}

impl Publisher for StubShopify {
    async fn publish_page(
        &self,
        request: PublishRequest<'_>,
    ) -> Result<PublishReceipt, PublishError> {
        self.bodies.lock().await.push(request.body_html.to_owned());
        Ok(PublishReceipt {
            remote_id: request.remote_id.unwrap_or(RemotePageId::new(7001)),
            url: format!("https://demo.myshopify.com/pages/{}", request.handle),
        })
    }
}

/// Rejects every publish as unauthenticated.
struct LockedOutShopify;

impl Publisher for LockedOutShopify {
    async fn publish_page(
        &self,
        _request: PublishRequest<'_>,
    ) -> Result<PublishReceipt, PublishError> {
        Err(PublishError::Unauthenticated)
    }
}

fn service<P: Publisher>(publisher: P) -> PageService<MemoryPageStore, P> {
    PageService::new(MemoryPageStore::new(), publisher, WidgetCatalog::builtin())
}

// =============================================================================
// Publish Flow Tests
// =============================================================================

#[tokio::test]
async fn test_publish_pushes_serialized_body() {
    let (stub, bodies) = StubShopify::with_log();
    let service = service(stub);
    let catalog = WidgetCatalog::builtin();
    let shop = demo_shop();

    let saved = service.save(&shop, sample_page(&catalog)).await.unwrap();
    let published = service.publish(&shop, saved.id).await.unwrap();

    assert_eq!(published.status, PageStatus::Published);
    assert!(published.remote.is_some(), "publish must record remote identity");

    // exactly one body was pushed, and it round-trips back to the saved
    // content
    let bodies = bodies.lock().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(serialize::deserialize(&bodies[0]), saved.content);
}

#[tokio::test]
async fn test_publish_then_edit_then_republish() {
    let service = service(StubShopify::default());
    let catalog = WidgetCatalog::builtin();
    let shop = demo_shop();

    let saved = service.save(&shop, sample_page(&catalog)).await.unwrap();
    let published = service.publish(&shop, saved.id).await.unwrap();
    let remote_id = published.remote.as_ref().unwrap().id;

    let mut edited = published;
    edited.title = "About Us".to_owned();
    let edited = service.save(&shop, edited).await.unwrap();
    assert_eq!(edited.status, PageStatus::Published, "editing does not unpublish");

    let republished = service.publish(&shop, edited.id).await.unwrap();
    assert_eq!(
        republished.remote.as_ref().unwrap().id,
        remote_id,
        "republish targets the same remote page"
    );
}

#[tokio::test]
async fn test_unauthenticated_publish_keeps_local_draft() {
    let service = service(LockedOutShopify);
    let catalog = WidgetCatalog::builtin();
    let shop = demo_shop();

    let saved = service.save(&shop, sample_page(&catalog)).await.unwrap();
    let err = service.publish(&shop, saved.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Publish(PublishError::Unauthenticated)
    ));

    let reloaded = service.load(&shop, saved.id).await.unwrap();
    assert_eq!(reloaded.status, PageStatus::Draft);
    assert_eq!(reloaded.content, saved.content, "local content survives");
}

// =============================================================================
// Store Semantics Through The Service
// =============================================================================

#[tokio::test]
async fn test_stale_editor_gets_conflict_not_overwrite() {
    let service = service(StubShopify::default());
    let catalog = WidgetCatalog::builtin();
    let shop = demo_shop();

    let saved = service.save(&shop, sample_page(&catalog)).await.unwrap();

    // two editors load the same version
    let mut editor_a = saved.clone();
    let mut editor_b = saved;

    editor_a.title = "Version A".to_owned();
    service.save(&shop, editor_a).await.unwrap();

    editor_b.title = "Version B".to_owned();
    let err = service.save(&shop, editor_b).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Save(StoreError::Conflict { .. })
    ));

    let winner = service.list(&shop).await.unwrap();
    assert_eq!(winner[0].title, "Version A");
}

#[tokio::test]
async fn test_retry_of_identical_save_is_a_noop() {
    let service = service(StubShopify::default());
    let catalog = WidgetCatalog::builtin();
    let shop = demo_shop();

    let saved = service.save(&shop, sample_page(&catalog)).await.unwrap();
    let retried = service.save(&shop, saved.clone()).await.unwrap();

    assert_eq!(retried.version, saved.version);
    assert_eq!(service.list(&shop).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_then_publish_fails_cleanly() {
    let service = service(StubShopify::default());
    let catalog = WidgetCatalog::builtin();
    let shop = demo_shop();

    let saved = service.save(&shop, sample_page(&catalog)).await.unwrap();
    service.delete(&shop, saved.id).await.unwrap();

    let err = service.publish(&shop, saved.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Save(StoreError::NotFound(_))));
}
