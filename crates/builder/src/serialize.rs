//! Page serialization to and from Shopify's `body_html`.
//!
//! `serialize` renders each top-level element and wraps the result in a
//! minimal container, together with a JSON island carrying the element
//! model itself. That island is what makes round-tripping our own output
//! lossless.
//!
//! `deserialize` is best-effort and lossy by contract: HTML that this
//! serializer did not produce (no island, corrupt island, or an island
//! written by a newer widget catalog) is wrapped in a single opaque
//! `raw-html` element rather than structurally guessed at.

use serde::{Deserialize, Serialize};

use crate::catalog::{WidgetCatalog, WidgetKind};
use crate::model::{ElementContent, Page, PageContent, PageElement, SCHEMA_VERSION, Settings};
use crate::render::Renderer;

/// Marker attribute identifying the embedded element model.
const SOURCE_ISLAND_ID: &str = "id=\"pagesmith-source\"";

/// The JSON island embedded next to the rendered markup.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceIsland {
    schema_version: u32,
    content: PageContent,
}

/// Serialize a page to the HTML document body handed to Shopify.
#[must_use]
pub fn serialize(page: &Page, catalog: &WidgetCatalog) -> String {
    let renderer = Renderer::new(catalog);
    let body = page
        .content
        .elements()
        .iter()
        .map(|element| renderer.render(element))
        .collect::<Vec<_>>()
        .join("\n");

    let island = SourceIsland {
        schema_version: page.schema_version,
        content: page.content.clone(),
    };
    // Model types serialize infallibly; an empty island only occurs if
    // that assumption is ever broken, and degrades to a lossy artifact
    let island_json = serde_json::to_string(&island).unwrap_or_default();
    // Escaped solidus keeps any "</script>" inside content from closing
    // the island early; JSON parsers read it back transparently
    let island_json = island_json.replace("</", "<\\/");

    format!(
        "<div class=\"pagesmith-page\" data-pagesmith-schema=\"{}\">\n{body}\n<script type=\"application/json\" {SOURCE_ISLAND_ID}>{island_json}</script>\n</div>",
        page.schema_version
    )
}

/// Reconstitute page content from stored HTML.
///
/// Lossless only for HTML produced by [`serialize`] with a supported
/// schema version; anything else becomes a single `raw-html` element
/// wrapping the entire body. Empty input yields [`PageContent::Empty`].
#[must_use]
pub fn deserialize(html: &str) -> PageContent {
    if html.trim().is_empty() {
        return PageContent::Empty;
    }

    match extract_island(html) {
        Some(island_json) => match serde_json::from_str::<SourceIsland>(island_json) {
            Ok(island) if island.schema_version <= SCHEMA_VERSION => island.content,
            Ok(island) => {
                tracing::warn!(
                    found = island.schema_version,
                    supported = SCHEMA_VERSION,
                    "page content written by a newer widget catalog, refusing to parse"
                );
                raw_fallback(html)
            }
            Err(error) => {
                tracing::warn!(%error, "corrupt source island, treating page as raw HTML");
                raw_fallback(html)
            }
        },
        None => raw_fallback(html),
    }
}

/// Locate the JSON island payload inside serialized HTML.
fn extract_island(html: &str) -> Option<&str> {
    let marker = html.find(SOURCE_ISLAND_ID)?;
    let tail = html.get(marker..)?;
    let open = tail.find('>')?;
    let body = tail.get(open + 1..)?;
    let close = body.find("</script>")?;
    body.get(..close)
}

fn raw_fallback(html: &str) -> PageContent {
    PageContent::Elements(vec![PageElement::new(
        WidgetKind::raw_html(),
        ElementContent::Text(html.to_owned()),
        Settings::new(),
    )])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pagesmith_core::Handle;
    use serde_json::json;

    fn sample_page(catalog: &WidgetCatalog) -> Page {
        let heading = catalog
            .create_element(WidgetKind::heading())
            .update_field("content", json!("Welcome"))
            .unwrap();
        let section_child = catalog
            .create_element(WidgetKind::text())
            .update_field("content", json!("Inside a section"))
            .unwrap();
        let section = PageElement::new(
            WidgetKind::section(),
            ElementContent::Children(vec![section_child]),
            Settings::new(),
        );
        Page::new("Landing", Handle::from_title("Landing"))
            .with_content(PageContent::from_elements(vec![heading, section]))
    }

    #[test]
    fn test_serialize_contains_rendered_elements_and_container() {
        let catalog = WidgetCatalog::builtin();
        let page = sample_page(&catalog);

        let html = serialize(&page, &catalog);
        assert!(html.starts_with("<div class=\"pagesmith-page\""));
        assert!(html.contains("data-pagesmith-schema=\"1\""));
        assert!(html.contains("Welcome"));
        assert!(html.contains("Inside a section"));
        assert!(html.contains("pagesmith-source"));
    }

    #[test]
    fn test_roundtrip_preserves_model() {
        let catalog = WidgetCatalog::builtin();
        let page = sample_page(&catalog);

        let html = serialize(&page, &catalog);
        let restored = deserialize(&html);

        assert_eq!(restored, page.content);
    }

    #[test]
    fn test_roundtrip_survives_script_content() {
        let catalog = WidgetCatalog::builtin();
        let code = catalog
            .create_element(WidgetKind::custom_code())
            .update_field("content", json!("<script>alert(1)</script>"))
            .unwrap();
        let page = Page::new("Code", Handle::from_title("Code"))
            .with_content(PageContent::from_elements(vec![code]));

        let html = serialize(&page, &catalog);
        let restored = deserialize(&html);
        assert_eq!(restored, page.content);
    }

    #[test]
    fn test_empty_page_roundtrip() {
        let catalog = WidgetCatalog::builtin();
        let page = Page::new("Blank", Handle::from_title("Blank"));

        let html = serialize(&page, &catalog);
        assert_eq!(deserialize(&html), PageContent::Empty);
    }

    #[test]
    fn test_empty_input_deserializes_to_empty() {
        assert_eq!(deserialize(""), PageContent::Empty);
        assert_eq!(deserialize("   \n  "), PageContent::Empty);
    }

    #[test]
    fn test_foreign_html_falls_back_to_raw_element() {
        let foreign = "<h1>Hand-written page</h1><p>Not ours.</p>";
        let restored = deserialize(foreign);

        let elements = restored.elements();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, WidgetKind::raw_html());
        assert_eq!(elements[0].content.as_text(), Some(foreign));
    }

    #[test]
    fn test_corrupt_island_falls_back_to_raw_element() {
        let corrupt = format!(
            "<div><script type=\"application/json\" {SOURCE_ISLAND_ID}>{{not json</script></div>"
        );
        let restored = deserialize(&corrupt);
        assert_eq!(restored.elements()[0].kind, WidgetKind::raw_html());
    }

    #[test]
    fn test_newer_schema_is_refused() {
        let newer = format!(
            "<div><script type=\"application/json\" {SOURCE_ISLAND_ID}>{{\"schemaVersion\":99,\"content\":\"empty\"}}</script></div>"
        );
        let restored = deserialize(&newer);
        assert_eq!(restored.elements()[0].kind, WidgetKind::raw_html());
    }

    #[test]
    fn test_raw_fallback_rerenders_verbatim() {
        let catalog = WidgetCatalog::builtin();
        let foreign = "<h1>Legacy</h1>";
        let restored = deserialize(foreign);

        let page = Page::new("Legacy", Handle::from_title("Legacy")).with_content(restored);
        let html = serialize(&page, &catalog);
        assert!(html.contains("<h1>Legacy</h1>"));
    }
}
