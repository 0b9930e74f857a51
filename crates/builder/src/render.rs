//! Element-to-HTML rendering.
//!
//! Rendering dispatches through the widget catalog (no central
//! `switch(type)`), merges stored settings over the widget's default
//! table, and recurses into section children with a depth guard so a
//! corrupt or maliciously deep tree can never exhaust the stack.

use crate::catalog::WidgetCatalog;
use crate::model::{PageElement, Settings};

/// Maximum allowed section nesting depth. Children beyond this depth
/// render a truncation marker instead of recursing.
pub const MAX_SECTION_DEPTH: usize = 8;

/// Marker emitted in place of children nested beyond [`MAX_SECTION_DEPTH`].
pub const DEPTH_TRUNCATION_MARKER: &str = "<!-- pagesmith: nesting depth limit reached -->";

/// Signature of a widget render function registered in the catalog.
///
/// Receives the render context (for recursing into children), the
/// element, and the element's settings already merged over the widget's
/// defaults.
pub type RenderFn = fn(&RenderContext<'_>, &PageElement, &Settings) -> String;

/// Renders elements against a widget catalog.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    catalog: &'a WidgetCatalog,
}

impl<'a> Renderer<'a> {
    /// Create a renderer over a catalog.
    #[must_use]
    pub const fn new(catalog: &'a WidgetCatalog) -> Self {
        Self { catalog }
    }

    /// Render one element (and, for sections, its subtree) to markup.
    ///
    /// Never fails: unknown widget kinds render a tagged placeholder so
    /// a corrupt or future-versioned page degrades instead of erroring.
    #[must_use]
    pub fn render(&self, element: &PageElement) -> String {
        RenderContext {
            catalog: self.catalog,
            depth: 0,
        }
        .render(element)
    }
}

/// Per-call rendering state handed to widget render functions.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    catalog: &'a WidgetCatalog,
    depth: usize,
}

impl RenderContext<'_> {
    /// Current section nesting depth (0 for top-level elements).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Render a child element one level deeper.
    #[must_use]
    pub fn render_child(&self, element: &PageElement) -> String {
        Self {
            catalog: self.catalog,
            depth: self.depth + 1,
        }
        .render(element)
    }

    fn render(&self, element: &PageElement) -> String {
        if self.depth > MAX_SECTION_DEPTH {
            tracing::warn!(
                element_id = %element.id,
                depth = self.depth,
                "element nested beyond depth limit, truncating"
            );
            return DEPTH_TRUNCATION_MARKER.to_owned();
        }

        self.catalog.get(&element.kind).map_or_else(
            || {
                tracing::warn!(
                    element_id = %element.id,
                    kind = %element.kind,
                    "no renderer registered for widget kind, emitting placeholder"
                );
                format!(
                    "<div class=\"ps-widget ps-widget--unknown\" data-widget-kind=\"{}\">Unsupported widget</div>",
                    escape_html(element.kind.as_str())
                )
            },
            |spec| {
                let merged = element.settings.merged_over(&spec.default_settings());
                (spec.render)(self, element, &merged)
            },
        )
    }
}

/// Escape text for safe interpolation into HTML bodies and attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::WidgetKind;
    use crate::model::ElementContent;

    fn deep_section_chain(levels: usize) -> PageElement {
        let mut element = PageElement::new(
            WidgetKind::text(),
            ElementContent::Text("bottom".to_owned()),
            Settings::default(),
        );
        for _ in 0..levels {
            element = PageElement::new(
                WidgetKind::section(),
                ElementContent::Children(vec![element]),
                Settings::default(),
            );
        }
        element
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x&y')</script>"),
            "&lt;script&gt;alert(&#39;x&amp;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_unknown_kind_renders_placeholder() {
        let catalog = WidgetCatalog::builtin();
        let renderer = Renderer::new(&catalog);
        let element = PageElement::new(
            WidgetKind::new("hologram"),
            ElementContent::empty(),
            Settings::default(),
        );

        let html = renderer.render(&element);
        assert!(html.contains("ps-widget--unknown"));
        assert!(html.contains("data-widget-kind=\"hologram\""));
    }

    #[test]
    fn test_every_builtin_kind_renders_non_empty() {
        let catalog = WidgetCatalog::builtin();
        let renderer = Renderer::new(&catalog);

        for kind in catalog.kinds() {
            let element = catalog.create_element(kind.clone());
            let html = renderer.render(&element);
            assert!(!html.is_empty(), "{kind} rendered empty markup");
            assert!(
                !html.contains("{{"),
                "{kind} markup contains unresolved placeholder: {html}"
            );
        }
    }

    #[test]
    fn test_depth_guard_truncates_deep_trees() {
        let catalog = WidgetCatalog::builtin();
        let renderer = Renderer::new(&catalog);

        let tree = deep_section_chain(50);
        let html = renderer.render(&tree);

        assert!(html.contains(DEPTH_TRUNCATION_MARKER));
        assert!(!html.contains("bottom"), "content beyond the limit must not render");
    }

    #[test]
    fn test_shallow_tree_renders_fully() {
        let catalog = WidgetCatalog::builtin();
        let renderer = Renderer::new(&catalog);

        let tree = deep_section_chain(4);
        let html = renderer.render(&tree);

        assert!(html.contains("bottom"));
        assert!(!html.contains(DEPTH_TRUNCATION_MARKER));
    }
}
