//! Publish a page file to the configured Shopify store.

use tracing::info;

use pagesmith_builder::catalog::WidgetCatalog;
use pagesmith_builder::config::ShopifyConfig;
use pagesmith_builder::model::RemotePage;
use pagesmith_builder::serialize;
use pagesmith_builder::shopify::{PublishRequest, Publisher, ShopifyPagesClient};
use pagesmith_core::PageStatus;

/// Publish a page file, rewriting it in place with the remote identity
/// so the next publish updates the same Shopify page.
///
/// # Errors
///
/// Returns an error if configuration is missing, the page file is
/// invalid, or Shopify rejects the publish. A failed publish leaves the
/// file untouched.
pub async fn page(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopifyConfig::from_env()?;
    let client = ShopifyPagesClient::new(&config)?;
    let catalog = WidgetCatalog::builtin();

    let page = super::read_page(input).await?;
    let body_html = serialize::serialize(&page, &catalog);

    let receipt = client
        .publish_page(PublishRequest {
            title: &page.title,
            handle: &page.handle,
            body_html: &body_html,
            remote_id: page.remote.as_ref().map(|remote| remote.id),
        })
        .await?;

    info!(page_id = %page.id, url = %receipt.url, "page published");

    let mut published = page;
    published.status = PageStatus::Published;
    published.remote = Some(RemotePage {
        id: receipt.remote_id,
        url: receipt.url,
    });
    super::write_page(input, &published).await?;
    Ok(())
}
