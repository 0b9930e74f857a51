//! Widget catalog: the single registry behind defaults, validation,
//! rendering, and the properties panel.
//!
//! Every widget kind is registered exactly once with its default content
//! shape, default settings table, editable-field descriptors, and render
//! function. Adding a kind is one [`WidgetCatalog::register`] call;
//! nothing else in the crate switches on kind names.

mod widgets;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{ElementContent, ModelError, PageElement, Settings};
use crate::render::RenderFn;

/// A widget kind name (`heading`, `section`, `shopify-product`, ...).
///
/// Deliberately an open string rather than a closed enum: the catalog is
/// the source of truth for which kinds exist, and pages written by a
/// newer catalog must stay representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetKind(String);

macro_rules! widget_kind_constructors {
    ($(($fn_name:ident, $lit:literal)),* $(,)?) => {
        impl WidgetKind {
            $(
                #[doc = concat!("The `", $lit, "` widget kind.")]
                #[must_use]
                pub fn $fn_name() -> Self {
                    Self($lit.to_owned())
                }
            )*
        }
    };
}

widget_kind_constructors!(
    (heading, "heading"),
    (text, "text"),
    (image, "image"),
    (button, "button"),
    (divider, "divider"),
    (section, "section"),
    (shopify_product, "shopify-product"),
    (shopify_collection, "shopify-collection"),
    (video, "video"),
    (custom_code, "custom-code"),
    (form_builder, "form-builder"),
    (social_media, "social-media"),
    (raw_html, "raw-html"),
);

impl WidgetKind {
    /// Create a kind from an arbitrary name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The kind name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WidgetKind {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Catalog grouping for the widget picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetCategory {
    Basic,
    Media,
    Shopify,
    Advanced,
}

/// The legal shape of a kind's content payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    /// Plain string content.
    Text,
    /// Child elements (sections).
    Children,
    /// Key/value object content with a set of required keys.
    Object { required: &'static [&'static str] },
}

/// Editor control rendered for one editable field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldControl {
    Text,
    TextArea,
    Color,
    Slider { min: f64, max: f64, unit: &'static str },
    Select(&'static [&'static str]),
    Toggle,
}

/// One editable field of a widget, addressed by the same dotted path
/// [`PageElement::update_field`] accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub path: &'static str,
    pub label: &'static str,
    pub control: FieldControl,
}

/// Everything the system knows about one widget kind.
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub category: WidgetCategory,
    pub fields: Vec<FieldDescriptor>,
    pub content_shape: ContentShape,
    default_content: fn() -> ElementContent,
    default_settings: fn() -> Settings,
    pub render: RenderFn,
}

impl WidgetSpec {
    /// The default content for a fresh element of this kind.
    #[must_use]
    pub fn default_content(&self) -> ElementContent {
        (self.default_content)()
    }

    /// The default settings table for this kind.
    #[must_use]
    pub fn default_settings(&self) -> Settings {
        (self.default_settings)()
    }
}

impl std::fmt::Debug for WidgetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetSpec")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("category", &self.category)
            .field("content_shape", &self.content_shape)
            .finish_non_exhaustive()
    }
}

/// Registry of widget kinds.
#[derive(Debug, Default)]
pub struct WidgetCatalog {
    entries: BTreeMap<WidgetKind, WidgetSpec>,
}

impl WidgetCatalog {
    /// An empty catalog (for hosts that register their own widget set).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The catalog of built-in widgets.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        widgets::register_builtins(&mut catalog);
        catalog
    }

    /// Register (or replace) a widget kind.
    pub fn register(&mut self, spec: WidgetSpec) {
        self.entries.insert(spec.kind.clone(), spec);
    }

    /// Look up a kind's spec.
    #[must_use]
    pub fn get(&self, kind: &WidgetKind) -> Option<&WidgetSpec> {
        self.entries.get(kind)
    }

    /// Whether a kind is registered.
    #[must_use]
    pub fn contains(&self, kind: &WidgetKind) -> bool {
        self.entries.contains_key(kind)
    }

    /// Registered kinds, in stable order.
    pub fn kinds(&self) -> impl Iterator<Item = &WidgetKind> {
        self.entries.keys()
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a fresh element of a kind, with the kind's default content
    /// and settings and a newly allocated id.
    ///
    /// Unregistered kinds yield a placeholder element (empty text
    /// content, no settings) rather than an error, so a stale client
    /// asking for a retired kind never hard-fails.
    #[must_use]
    pub fn create_element(&self, kind: WidgetKind) -> PageElement {
        self.get(&kind).map_or_else(
            || {
                tracing::warn!(%kind, "creating placeholder for unregistered widget kind");
                PageElement::new(kind.clone(), ElementContent::empty(), Settings::new())
            },
            |spec| PageElement::new(kind.clone(), spec.default_content(), spec.default_settings()),
        )
    }

    /// Strictly validate an element's content shape against its kind,
    /// descending into section children.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UnknownWidget`] for an unregistered kind
    /// - [`ModelError::Validation`] when the content shape is wrong for
    ///   the kind (e.g. text content on a `shopify-product` element) or
    ///   a required structured key is missing
    pub fn validate_element(&self, element: &PageElement) -> Result<(), ModelError> {
        let spec = self
            .get(&element.kind)
            .ok_or_else(|| ModelError::UnknownWidget(element.kind.clone()))?;

        match (spec.content_shape, &element.content) {
            (ContentShape::Text, ElementContent::Text(_)) => Ok(()),
            (ContentShape::Children, ElementContent::Children(children)) => {
                for child in children {
                    self.validate_element(child)?;
                }
                Ok(())
            }
            (ContentShape::Object { required }, ElementContent::Object(map)) => {
                for key in required {
                    if !map.contains_key(*key) {
                        return Err(ModelError::Validation(format!(
                            "{} content is missing required key {key:?}",
                            element.kind
                        )));
                    }
                }
                Ok(())
            }
            (expected, _) => Err(ModelError::Validation(format!(
                "{} content has the wrong shape (expected {expected:?})",
                element.kind
            ))),
        }
    }
}
