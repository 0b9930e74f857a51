//! Built-in widget registrations.
//!
//! Each widget kind is declared here once: display metadata for the
//! picker, editable-field descriptors for the properties panel, default
//! content and settings, and the render function. The renderer and the
//! validator both dispatch through these entries.

use serde_json::json;

use pagesmith_core::Dimension;

use crate::model::{ElementContent, PageElement, Settings};
use crate::render::{RenderContext, escape_html};

use super::{
    ContentShape, FieldControl, FieldDescriptor, WidgetCatalog, WidgetCategory, WidgetKind,
    WidgetSpec,
};

/// Register all built-in widgets into a catalog.
pub fn register_builtins(catalog: &mut WidgetCatalog) {
    catalog.register(heading_spec());
    catalog.register(text_spec());
    catalog.register(image_spec());
    catalog.register(button_spec());
    catalog.register(divider_spec());
    catalog.register(section_spec());
    catalog.register(shopify_product_spec());
    catalog.register(shopify_collection_spec());
    catalog.register(video_spec());
    catalog.register(custom_code_spec());
    catalog.register(form_builder_spec());
    catalog.register(social_media_spec());
    catalog.register(raw_html_spec());
}

// =============================================================================
// Style helper
// =============================================================================

/// Accumulates CSS declarations from merged settings.
///
/// Unset settings simply contribute nothing, so a widget's visual
/// default (e.g. a transparent background) wins without painting.
#[derive(Default)]
struct Style {
    declarations: Vec<String>,
}

impl Style {
    fn new() -> Self {
        Self::default()
    }

    /// Add a declaration from a `{ size, unit }` setting.
    fn dimension(mut self, settings: &Settings, key: &str, property: &str) -> Self {
        if let Some(dimension) = settings.get_dimension(key) {
            self.declarations.push(format!("{property}: {dimension}"));
        }
        self
    }

    /// Add a declaration from a string setting.
    fn string(mut self, settings: &Settings, key: &str, property: &str) -> Self {
        if let Some(value) = settings.get_str(key) {
            self.declarations
                .push(format!("{property}: {}", escape_html(value)));
        }
        self
    }

    /// Add a fixed declaration.
    fn raw(mut self, property: &str, value: &str) -> Self {
        self.declarations.push(format!("{property}: {value}"));
        self
    }

    /// Render as a ` style="..."` attribute, or nothing if empty.
    fn attr(&self) -> String {
        if self.declarations.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", self.declarations.join("; "))
        }
    }
}

// =============================================================================
// Basic widgets
// =============================================================================

fn heading_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::heading(),
        label: "Heading",
        icon: "type",
        category: WidgetCategory::Basic,
        fields: vec![
            field("content", "Heading text", FieldControl::Text),
            field(
                "settings.level",
                "Level",
                FieldControl::Select(&["h1", "h2", "h3", "h4", "h5", "h6"]),
            ),
            field(
                "settings.fontSize",
                "Font size",
                FieldControl::Slider { min: 10.0, max: 96.0, unit: "px" },
            ),
            field(
                "settings.textAlign",
                "Alignment",
                FieldControl::Select(&["left", "center", "right"]),
            ),
            field("settings.color", "Color", FieldControl::Color),
        ],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text("New Heading".to_owned()),
        default_settings: || {
            Settings::new()
                .with("level", "h2")
                .with_dimension("fontSize", Dimension::px(24))
                .with("textAlign", "left")
                .with("color", "")
                .with_dimension("marginBottom", Dimension::px(16))
        },
        render: render_heading,
    }
}

fn render_heading(_ctx: &RenderContext<'_>, element: &PageElement, settings: &Settings) -> String {
    let level = match settings.get_str("level") {
        Some(l @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6")) => l,
        _ => "h2",
    };
    let style = Style::new()
        .dimension(settings, "fontSize", "font-size")
        .string(settings, "textAlign", "text-align")
        .string(settings, "color", "color")
        .dimension(settings, "marginBottom", "margin-bottom")
        .attr();
    let text = escape_html(element.content.as_text().unwrap_or_default());
    format!("<{level} class=\"ps-heading\"{style}>{text}</{level}>")
}

fn text_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::text(),
        label: "Text",
        icon: "align-left",
        category: WidgetCategory::Basic,
        fields: vec![
            field("content", "Text", FieldControl::TextArea),
            field(
                "settings.fontSize",
                "Font size",
                FieldControl::Slider { min: 10.0, max: 48.0, unit: "px" },
            ),
            field(
                "settings.textAlign",
                "Alignment",
                FieldControl::Select(&["left", "center", "right", "justify"]),
            ),
            field("settings.color", "Color", FieldControl::Color),
        ],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text("Add your text here".to_owned()),
        default_settings: || {
            Settings::new()
                .with_dimension("fontSize", Dimension::px(16))
                .with("textAlign", "left")
                .with("color", "")
                .with("lineHeight", "1.6")
        },
        render: render_text,
    }
}

fn render_text(_ctx: &RenderContext<'_>, element: &PageElement, settings: &Settings) -> String {
    let style = Style::new()
        .dimension(settings, "fontSize", "font-size")
        .string(settings, "textAlign", "text-align")
        .string(settings, "color", "color")
        .string(settings, "lineHeight", "line-height")
        .attr();
    let text = escape_html(element.content.as_text().unwrap_or_default());
    format!("<p class=\"ps-text\"{style}>{text}</p>")
}

fn image_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::image(),
        label: "Image",
        icon: "image",
        category: WidgetCategory::Media,
        fields: vec![
            field("content", "Image URL", FieldControl::Text),
            field("settings.altText", "Alt text", FieldControl::Text),
            field(
                "settings.width",
                "Width",
                FieldControl::Slider { min: 10.0, max: 100.0, unit: "%" },
            ),
            field(
                "settings.borderRadius",
                "Corner radius",
                FieldControl::Slider { min: 0.0, max: 48.0, unit: "px" },
            ),
            field(
                "settings.alignment",
                "Alignment",
                FieldControl::Select(&["left", "center", "right"]),
            ),
        ],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text(String::new()),
        default_settings: || {
            Settings::new()
                .with("altText", "")
                .with_dimension("width", Dimension::percent(100))
                .with_dimension("borderRadius", Dimension::px(0))
                .with("alignment", "center")
        },
        render: render_image,
    }
}

fn render_image(_ctx: &RenderContext<'_>, element: &PageElement, settings: &Settings) -> String {
    let alignment = escape_html(settings.get_str("alignment").unwrap_or("center"));
    let url = element.content.as_text().unwrap_or_default();

    if url.is_empty() {
        return format!(
            "<figure class=\"ps-image ps-image--empty\" style=\"text-align: {alignment}\">Image placeholder</figure>"
        );
    }

    let img_style = Style::new()
        .dimension(settings, "width", "width")
        .dimension(settings, "borderRadius", "border-radius")
        .attr();
    let alt = escape_html(settings.get_str("altText").unwrap_or_default());
    format!(
        "<figure class=\"ps-image\" style=\"text-align: {alignment}\"><img src=\"{}\" alt=\"{alt}\"{img_style}></figure>",
        escape_html(url)
    )
}

fn button_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::button(),
        label: "Button",
        icon: "square",
        category: WidgetCategory::Basic,
        fields: vec![
            field("content", "Label", FieldControl::Text),
            field("settings.linkUrl", "Link URL", FieldControl::Text),
            field("settings.backgroundColor", "Background", FieldControl::Color),
            field("settings.textColor", "Text color", FieldControl::Color),
            field(
                "settings.borderRadius",
                "Corner radius",
                FieldControl::Slider { min: 0.0, max: 32.0, unit: "px" },
            ),
            field(
                "settings.alignment",
                "Alignment",
                FieldControl::Select(&["left", "center", "right"]),
            ),
        ],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text("Click me".to_owned()),
        default_settings: || {
            Settings::new()
                .with("linkUrl", "#")
                .with("backgroundColor", "#1f2937")
                .with("textColor", "#ffffff")
                .with_dimension("padding", Dimension::px(12))
                .with_dimension("borderRadius", Dimension::px(4))
                .with("alignment", "left")
        },
        render: render_button,
    }
}

fn render_button(_ctx: &RenderContext<'_>, element: &PageElement, settings: &Settings) -> String {
    let alignment = escape_html(settings.get_str("alignment").unwrap_or("left"));
    let href = escape_html(settings.get_str("linkUrl").unwrap_or("#"));
    let style = Style::new()
        .string(settings, "backgroundColor", "background-color")
        .string(settings, "textColor", "color")
        .dimension(settings, "padding", "padding")
        .dimension(settings, "borderRadius", "border-radius")
        .raw("display", "inline-block")
        .raw("text-decoration", "none")
        .attr();
    let label = escape_html(element.content.as_text().unwrap_or_default());
    format!(
        "<div style=\"text-align: {alignment}\"><a class=\"ps-button\" href=\"{href}\"{style}>{label}</a></div>"
    )
}

fn divider_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::divider(),
        label: "Divider",
        icon: "minus",
        category: WidgetCategory::Basic,
        fields: vec![
            field(
                "settings.thickness",
                "Thickness",
                FieldControl::Slider { min: 1.0, max: 12.0, unit: "px" },
            ),
            field(
                "settings.lineStyle",
                "Style",
                FieldControl::Select(&["solid", "dashed", "dotted"]),
            ),
            field("settings.color", "Color", FieldControl::Color),
        ],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text(String::new()),
        default_settings: || {
            Settings::new()
                .with_dimension("thickness", Dimension::px(1))
                .with("lineStyle", "solid")
                .with("color", "#e5e7eb")
                .with_dimension("marginY", Dimension::px(16))
        },
        render: render_divider,
    }
}

fn render_divider(_ctx: &RenderContext<'_>, _element: &PageElement, settings: &Settings) -> String {
    let thickness = settings
        .get_dimension("thickness")
        .unwrap_or(Dimension::px(1));
    let line_style = settings.get_str("lineStyle").unwrap_or("solid");
    let color = settings.get_str("color").unwrap_or("#e5e7eb");
    let margin = settings.get_dimension("marginY").unwrap_or(Dimension::px(16));
    format!(
        "<hr class=\"ps-divider\" style=\"border: none; border-top: {thickness} {line_style} {}; margin: {margin} 0\">",
        escape_html(color)
    )
}

fn section_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::section(),
        label: "Section",
        icon: "layout",
        category: WidgetCategory::Basic,
        fields: vec![
            field("settings.backgroundColor", "Background", FieldControl::Color),
            field(
                "settings.padding",
                "Padding",
                FieldControl::Slider { min: 0.0, max: 96.0, unit: "px" },
            ),
            field(
                "settings.gap",
                "Spacing",
                FieldControl::Slider { min: 0.0, max: 64.0, unit: "px" },
            ),
        ],
        content_shape: ContentShape::Children,
        default_content: || ElementContent::Children(Vec::new()),
        default_settings: || {
            // backgroundColor intentionally defaults to unset: an empty
            // value must not paint over the parent
            Settings::new()
                .with("backgroundColor", "")
                .with_dimension("padding", Dimension::px(16))
                .with_dimension("gap", Dimension::px(12))
        },
        render: render_section,
    }
}

fn render_section(ctx: &RenderContext<'_>, element: &PageElement, settings: &Settings) -> String {
    let style = Style::new()
        .string(settings, "backgroundColor", "background-color")
        .dimension(settings, "padding", "padding")
        .dimension(settings, "gap", "row-gap")
        .raw("display", "flex")
        .raw("flex-direction", "column")
        .attr();

    let children = element
        .content
        .as_children()
        .unwrap_or_default()
        .iter()
        .map(|child| ctx.render_child(child))
        .collect::<Vec<_>>()
        .join("\n");

    format!("<section class=\"ps-section\"{style}>{children}</section>")
}

// =============================================================================
// Shopify embeds
// =============================================================================

fn shopify_product_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::shopify_product(),
        label: "Product",
        icon: "shopping-bag",
        category: WidgetCategory::Shopify,
        fields: vec![
            field("content.productId", "Product", FieldControl::Text),
            field(
                "content.displayMode",
                "Display",
                FieldControl::Select(&["card", "compact", "full"]),
            ),
            field("settings.showTitle", "Show title", FieldControl::Toggle),
            field("settings.showPrice", "Show price", FieldControl::Toggle),
        ],
        content_shape: ContentShape::Object {
            required: &["productId", "displayMode"],
        },
        default_content: || {
            ElementContent::Object(
                json!({ "productId": "", "displayMode": "card" })
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            )
        },
        default_settings: || {
            Settings::new()
                .with("showTitle", true)
                .with("showPrice", true)
                .with("textAlign", "center")
        },
        render: render_shopify_product,
    }
}

fn render_shopify_product(
    _ctx: &RenderContext<'_>,
    element: &PageElement,
    settings: &Settings,
) -> String {
    let display_mode = element.content.get_str("displayMode").unwrap_or("card");
    let style = Style::new().string(settings, "textAlign", "text-align").attr();
    let show_title = settings.get_bool("showTitle").unwrap_or(true);
    let show_price = settings.get_bool("showPrice").unwrap_or(true);

    element.content.get_str("productId").map_or_else(
        || {
            format!(
                "<div class=\"ps-product ps-product--empty\"{style}>Select a product to embed</div>"
            )
        },
        |product_id| {
            format!(
                "<div class=\"ps-product\" data-product-id=\"{}\" data-display-mode=\"{display_mode}\" data-show-title=\"{show_title}\" data-show-price=\"{show_price}\"{style}></div>",
                escape_html(product_id)
            )
        },
    )
}

fn shopify_collection_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::shopify_collection(),
        label: "Collection",
        icon: "grid",
        category: WidgetCategory::Shopify,
        fields: vec![
            field("content.collectionId", "Collection", FieldControl::Text),
            field(
                "content.displayMode",
                "Display",
                FieldControl::Select(&["grid", "carousel"]),
            ),
            field(
                "settings.columns",
                "Columns",
                FieldControl::Slider { min: 1.0, max: 6.0, unit: "" },
            ),
            field("settings.showTitles", "Show titles", FieldControl::Toggle),
        ],
        content_shape: ContentShape::Object {
            required: &["collectionId", "displayMode"],
        },
        default_content: || {
            ElementContent::Object(
                json!({ "collectionId": "", "displayMode": "grid" })
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            )
        },
        default_settings: || {
            Settings::new()
                .with("columns", 3)
                .with("showTitles", true)
        },
        render: render_shopify_collection,
    }
}

fn render_shopify_collection(
    _ctx: &RenderContext<'_>,
    element: &PageElement,
    settings: &Settings,
) -> String {
    let display_mode = element.content.get_str("displayMode").unwrap_or("grid");
    let columns = settings
        .get("columns")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(3);
    let show_titles = settings.get_bool("showTitles").unwrap_or(true);

    element.content.get_str("collectionId").map_or_else(
        || "<div class=\"ps-collection ps-collection--empty\">Select a collection to embed</div>".to_owned(),
        |collection_id| {
            format!(
                "<div class=\"ps-collection\" data-collection-id=\"{}\" data-display-mode=\"{display_mode}\" data-columns=\"{columns}\" data-show-titles=\"{show_titles}\"></div>",
                escape_html(collection_id)
            )
        },
    )
}

// =============================================================================
// Media & advanced widgets
// =============================================================================

fn video_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::video(),
        label: "Video",
        icon: "video",
        category: WidgetCategory::Media,
        fields: vec![
            field("content", "Video URL", FieldControl::Text),
            field(
                "settings.width",
                "Width",
                FieldControl::Slider { min: 10.0, max: 100.0, unit: "%" },
            ),
            field("settings.controls", "Show controls", FieldControl::Toggle),
            field("settings.autoplay", "Autoplay", FieldControl::Toggle),
        ],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text(String::new()),
        default_settings: || {
            Settings::new()
                .with_dimension("width", Dimension::percent(100))
                .with("controls", true)
                .with("autoplay", false)
        },
        render: render_video,
    }
}

/// Extract the embeddable player URL for YouTube links.
fn youtube_embed_url(url: &str) -> Option<String> {
    let video_id = url
        .split_once("youtube.com/watch?v=")
        .map(|(_, rest)| rest)
        .or_else(|| url.split_once("youtu.be/").map(|(_, rest)| rest))?;
    let video_id: String = video_id
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if video_id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}

fn render_video(_ctx: &RenderContext<'_>, element: &PageElement, settings: &Settings) -> String {
    let url = element.content.as_text().unwrap_or_default();
    if url.is_empty() {
        return "<div class=\"ps-video ps-video--empty\">Video placeholder</div>".to_owned();
    }

    let style = Style::new().dimension(settings, "width", "width").attr();

    if let Some(embed_url) = youtube_embed_url(url) {
        return format!(
            "<iframe class=\"ps-video\" src=\"{embed_url}\" frameborder=\"0\" allowfullscreen{style}></iframe>"
        );
    }

    let controls = if settings.get_bool("controls").unwrap_or(true) {
        " controls"
    } else {
        ""
    };
    let autoplay = if settings.get_bool("autoplay").unwrap_or(false) {
        " autoplay muted"
    } else {
        ""
    };
    format!(
        "<video class=\"ps-video\" src=\"{}\"{controls}{autoplay}{style}></video>",
        escape_html(url)
    )
}

fn custom_code_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::custom_code(),
        label: "Custom code",
        icon: "code",
        category: WidgetCategory::Advanced,
        fields: vec![field("content", "HTML", FieldControl::TextArea)],
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text("<!-- Add your code here -->".to_owned()),
        default_settings: Settings::new,
        render: render_custom_code,
    }
}

fn render_custom_code(
    _ctx: &RenderContext<'_>,
    element: &PageElement,
    _settings: &Settings,
) -> String {
    // Merchant-authored markup passes through unescaped
    format!(
        "<div class=\"ps-custom-code\">{}</div>",
        element.content.as_text().unwrap_or_default()
    )
}

fn form_builder_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::form_builder(),
        label: "Form",
        icon: "clipboard",
        category: WidgetCategory::Advanced,
        fields: vec![
            field("content.fields", "Fields", FieldControl::TextArea),
            field("content.submitLabel", "Submit label", FieldControl::Text),
            field("settings.buttonColor", "Button color", FieldControl::Color),
        ],
        content_shape: ContentShape::Object {
            required: &["fields", "submitLabel"],
        },
        default_content: || {
            ElementContent::Object(
                json!({
                    "fields": [
                        { "name": "name", "label": "Name", "fieldType": "text", "required": true },
                        { "name": "email", "label": "Email", "fieldType": "email", "required": true }
                    ],
                    "submitLabel": "Submit"
                })
                .as_object()
                .cloned()
                .unwrap_or_default(),
            )
        },
        default_settings: || {
            Settings::new()
                .with("buttonColor", "#1f2937")
                .with_dimension("gap", Dimension::px(12))
        },
        render: render_form_builder,
    }
}

fn render_form_builder(
    _ctx: &RenderContext<'_>,
    element: &PageElement,
    settings: &Settings,
) -> String {
    let gap = settings.get_dimension("gap").unwrap_or(Dimension::px(12));
    let button_color = settings.get_str("buttonColor").unwrap_or("#1f2937");

    let mut inputs = String::new();
    if let Some(fields) = element.content.get("fields").and_then(|v| v.as_array()) {
        for form_field in fields {
            let name = form_field.get("name").and_then(|v| v.as_str()).unwrap_or("");
            let label = form_field.get("label").and_then(|v| v.as_str()).unwrap_or(name);
            let field_type = form_field
                .get("fieldType")
                .and_then(|v| v.as_str())
                .unwrap_or("text");
            let required = form_field
                .get("required")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false);
            let required_attr = if required { " required" } else { "" };

            let control = if field_type == "textarea" {
                format!(
                    "<textarea name=\"{}\"{required_attr}></textarea>",
                    escape_html(name)
                )
            } else {
                format!(
                    "<input type=\"{}\" name=\"{}\"{required_attr}>",
                    escape_html(field_type),
                    escape_html(name)
                )
            };
            inputs.push_str(&format!(
                "<label class=\"ps-form__field\">{}{control}</label>",
                escape_html(label)
            ));
        }
    }

    let submit_label = escape_html(element.content.get_str("submitLabel").unwrap_or("Submit"));
    format!(
        "<form class=\"ps-form\" method=\"post\" style=\"display: flex; flex-direction: column; row-gap: {gap}\">{inputs}<button type=\"submit\" style=\"background-color: {}; color: #ffffff\">{submit_label}</button></form>",
        escape_html(button_color)
    )
}

fn social_media_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::social_media(),
        label: "Social links",
        icon: "share",
        category: WidgetCategory::Media,
        fields: vec![
            field("content.links", "Links", FieldControl::TextArea),
            field(
                "settings.iconSize",
                "Icon size",
                FieldControl::Slider { min: 16.0, max: 64.0, unit: "px" },
            ),
            field(
                "settings.alignment",
                "Alignment",
                FieldControl::Select(&["left", "center", "right"]),
            ),
        ],
        content_shape: ContentShape::Object {
            required: &["links"],
        },
        default_content: || {
            ElementContent::Object(
                json!({
                    "links": [
                        { "platform": "instagram", "url": "" },
                        { "platform": "facebook", "url": "" }
                    ]
                })
                .as_object()
                .cloned()
                .unwrap_or_default(),
            )
        },
        default_settings: || {
            Settings::new()
                .with_dimension("iconSize", Dimension::px(24))
                .with_dimension("gap", Dimension::px(12))
                .with("alignment", "center")
        },
        render: render_social_media,
    }
}

fn render_social_media(
    _ctx: &RenderContext<'_>,
    element: &PageElement,
    settings: &Settings,
) -> String {
    let alignment = settings.get_str("alignment").unwrap_or("center");
    let gap = settings.get_dimension("gap").unwrap_or(Dimension::px(12));
    let icon_size = settings.get_dimension("iconSize").unwrap_or(Dimension::px(24));

    let mut anchors = String::new();
    if let Some(links) = element.content.get("links").and_then(|v| v.as_array()) {
        for link in links {
            let platform = link.get("platform").and_then(|v| v.as_str()).unwrap_or("");
            let url = link.get("url").and_then(|v| v.as_str()).unwrap_or("");
            if platform.is_empty() || url.is_empty() {
                continue;
            }
            anchors.push_str(&format!(
                "<a class=\"ps-social__link ps-social__link--{}\" href=\"{}\" style=\"font-size: {icon_size}\" rel=\"noopener\">{}</a>",
                escape_html(platform),
                escape_html(url),
                escape_html(platform)
            ));
        }
    }

    if anchors.is_empty() {
        anchors.push_str("<span class=\"ps-social__empty\">Add social links</span>");
    }

    format!(
        "<div class=\"ps-social\" style=\"display: flex; column-gap: {gap}; justify-content: {}\">{anchors}</div>",
        justify_for(alignment)
    )
}

fn justify_for(alignment: &str) -> &'static str {
    match alignment {
        "left" => "flex-start",
        "right" => "flex-end",
        _ => "center",
    }
}

fn raw_html_spec() -> WidgetSpec {
    WidgetSpec {
        kind: WidgetKind::raw_html(),
        label: "Raw HTML",
        icon: "file-code",
        category: WidgetCategory::Advanced,
        // Internal kind: produced by the lossy deserializer, never shown
        // in the widget picker
        fields: Vec::new(),
        content_shape: ContentShape::Text,
        default_content: || ElementContent::Text(String::new()),
        default_settings: Settings::new,
        render: render_raw_html,
    }
}

fn render_raw_html(_ctx: &RenderContext<'_>, element: &PageElement, _settings: &Settings) -> String {
    let body = element.content.as_text().unwrap_or_default();
    if body.is_empty() {
        return "<div class=\"ps-raw-html\"></div>".to_owned();
    }
    format!("<div class=\"ps-raw-html\">{body}</div>")
}

fn field(path: &'static str, label: &'static str, control: FieldControl) -> FieldDescriptor {
    FieldDescriptor { path, label, control }
}
