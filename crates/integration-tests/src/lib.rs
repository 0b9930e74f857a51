//! Integration tests for Pagesmith.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pagesmith-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `page_pipeline` - Model edits through render, serialize, and the
//!   round-trip back
//! - `publish_flow` - Save/publish orchestration against mock publishers
//!
//! Everything here runs against the in-memory store and stub publishers;
//! no network or live Shopify store is required.

use serde_json::json;

use pagesmith_builder::catalog::{WidgetCatalog, WidgetKind};
use pagesmith_builder::model::{Page, PageContent};
use pagesmith_core::{Handle, ShopDomain};

/// Shop domain used by every test.
#[must_use]
pub fn demo_shop() -> ShopDomain {
    ShopDomain::new("demo.myshopify.com")
}

/// A small but representative page: a heading followed by a section
/// holding a text block and a button.
///
/// # Panics
///
/// Panics if the builtin catalog rejects its own defaults.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_page(catalog: &WidgetCatalog) -> Page {
    let heading = catalog
        .create_element(WidgetKind::heading())
        .update_field("content", json!("About Our Store"))
        .unwrap();
    let body = catalog
        .create_element(WidgetKind::text())
        .update_field("content", json!("We sell things we believe in."))
        .unwrap();
    let cta = catalog
        .create_element(WidgetKind::button())
        .update_field("content", json!("Browse the catalog"))
        .unwrap();
    let section = catalog
        .create_element(WidgetKind::section())
        .update_field("content", json!([body, cta]))
        .unwrap();

    let mut page = Page::new("About Our Store", Handle::from_title("About Our Store"));
    page.content = PageContent::from_elements(vec![heading, section]);
    page
}
