//! Write a starter page file.

use serde_json::json;
use tracing::info;

use pagesmith_builder::catalog::{WidgetCatalog, WidgetKind};
use pagesmith_builder::model::{Page, PageContent};
use pagesmith_core::Handle;

/// Write a page file seeded with one of each common widget.
///
/// The file is the page's canonical JSON form, the same shape `publish`
/// reads and rewrites.
///
/// # Errors
///
/// Returns an error if a seeded field is rejected or the file cannot be
/// written.
pub async fn starter_page(out: &str, title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = WidgetCatalog::builtin();

    let heading = catalog
        .create_element(WidgetKind::heading())
        .update_field("content", json!(title))?;
    let intro = catalog.create_element(WidgetKind::text()).update_field(
        "content",
        json!("Tell your story here. Edit this page and publish it when you are ready."),
    )?;
    let divider = catalog.create_element(WidgetKind::divider());
    let cta = catalog
        .create_element(WidgetKind::button())
        .update_field("content", json!("Shop now"))?
        .update_field("settings.linkUrl", json!("/collections/all"))?;

    let section = catalog
        .create_element(WidgetKind::section())
        .update_field("content", json!([intro, divider, cta]))?;

    let mut page = Page::new(title, Handle::from_title(title));
    page.content = PageContent::from_elements(vec![heading, section]);

    for element in page.content.elements() {
        catalog.validate_element(element)?;
    }

    super::write_page(out, &page).await?;
    info!(path = %out, page_id = %page.id, "starter page written");
    Ok(())
}
