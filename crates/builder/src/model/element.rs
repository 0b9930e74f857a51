//! Elements: the per-widget unit of page content.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use pagesmith_core::{Dimension, ElementId};

use crate::catalog::WidgetKind;

use super::ModelError;

/// The content payload of an element.
///
/// The shape is determined by the element's widget kind: plain text for
/// headings/text/image URLs/button labels, child elements for sections
/// (the only recursive kind), and a key/value object for structured
/// widgets like product embeds and forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementContent {
    /// Child elements (sections only).
    Children(Vec<PageElement>),
    /// Structured payload, e.g. `{ "productId": ..., "displayMode": ... }`.
    Object(serde_json::Map<String, Value>),
    /// A plain string: heading text, image URL, button label, raw code.
    Text(String),
}

impl ElementContent {
    /// Empty text content.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    /// The content as a string slice, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The content's child elements, if it is a section payload.
    #[must_use]
    pub fn as_children(&self) -> Option<&[PageElement]> {
        match self {
            Self::Children(children) => Some(children),
            _ => None,
        }
    }

    /// A structured field by key, if the content is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// A structured string field by key, treating empty strings as absent.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

/// Style/config settings attached to an element.
///
/// Keys are camelCase (`fontSize`, `textAlign`, `backgroundColor`).
/// Every key a widget understands has a default in the widget catalog;
/// absent keys fall back to defaults at render time, never at storage
/// time. Values that are `null` or the empty string count as unset, so
/// an empty background color does not paint a default over the parent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, Value>);

impl Settings {
    /// Empty settings map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert, used by catalog default tables.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Builder-style insert of a dimension value.
    #[must_use]
    pub fn with_dimension(self, key: &str, dimension: Dimension) -> Self {
        // Dimension serialization is infallible: two plain fields
        let value = serde_json::to_value(dimension).unwrap_or(Value::Null);
        self.with(key, value)
    }

    /// Insert a value under a key.
    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_owned(), value);
    }

    /// Look up a raw value. Unset values (null/empty string) yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !is_unset(v))
    }

    /// Look up a string setting.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a boolean setting.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Look up a `{ size, unit }` dimension setting.
    #[must_use]
    pub fn get_dimension(&self, key: &str) -> Option<Dimension> {
        self.get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Number of stored keys (including unset ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over stored key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge these settings over a default table.
    ///
    /// Keys set here (and not unset) win; everything else falls through
    /// to the defaults. Used by the renderer so stored pages never need
    /// a full settings map.
    #[must_use]
    pub fn merged_over(&self, defaults: &Self) -> Self {
        let mut merged = defaults.0.clone();
        for (key, value) in &self.0 {
            if !is_unset(value) {
                merged.insert(key.clone(), value.clone());
            }
        }
        Self(merged)
    }
}

/// Whether a settings value counts as "unset" and should fall through to
/// the widget's default.
fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// A single element of a page.
///
/// The id is allocated at creation time and stable for the element's
/// lifetime; the kind determines the legal content shape and settings
/// key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub content: ElementContent,
    pub settings: Settings,
}

impl PageElement {
    /// Construct an element with a fresh id.
    ///
    /// Most callers should go through
    /// [`WidgetCatalog::create_element`](crate::catalog::WidgetCatalog::create_element),
    /// which fills in the kind's default content and settings.
    #[must_use]
    pub fn new(kind: WidgetKind, content: ElementContent, settings: Settings) -> Self {
        Self {
            id: ElementId::generate(),
            kind,
            content,
            settings,
        }
    }

    /// Return a copy of this element with one field updated.
    ///
    /// `path` addresses either a whole field (`content`, `settings`) or a
    /// single key within one (`content.productId`, `settings.fontSize`).
    /// Dotted updates merge; whole-field updates replace. The receiver is
    /// never mutated.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidPath`] when the path root is not `content`
    ///   or `settings`
    /// - [`ModelError::Validation`] when the value's shape is wrong for
    ///   its destination (e.g. `content.x` on text content, a negative
    ///   dimension size, or a non-object replacement for `settings`)
    pub fn update_field(&self, path: &str, value: Value) -> Result<Self, ModelError> {
        let mut updated = self.clone();

        match path.split_once('.') {
            None => match path {
                "content" => {
                    updated.content = parse_content(value)?;
                }
                "settings" => {
                    updated.settings = parse_settings(value)?;
                }
                other => return Err(ModelError::InvalidPath(other.to_owned())),
            },
            Some(("content", key)) => match &mut updated.content {
                ElementContent::Object(map) => {
                    map.insert(key.to_owned(), value);
                }
                _ => {
                    return Err(ModelError::Validation(format!(
                        "cannot set content.{key}: content of a {} element is not structured",
                        self.kind
                    )));
                }
            },
            Some(("settings", key)) => {
                validate_setting_value(key, &value)?;
                updated.settings.insert(key, value);
            }
            Some((other, _)) => return Err(ModelError::InvalidPath(other.to_owned())),
        }

        Ok(updated)
    }
}

fn parse_content(value: Value) -> Result<ElementContent, ModelError> {
    serde_json::from_value(value)
        .map_err(|e| ModelError::Validation(format!("content must be text, children, or an object: {e}")))
}

fn parse_settings(value: Value) -> Result<Settings, ModelError> {
    match &value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| ModelError::Validation(format!("settings must be a string-keyed object: {e}"))),
        other => Err(ModelError::Validation(format!(
            "settings must be an object, got {other}"
        ))),
    }
}

/// Reject structurally invalid setting values at write time.
///
/// Only `{ size, unit }` objects get deep validation (negative or
/// non-finite sizes); everything else is schemaless by design and
/// validated by the widget's renderer via defaults.
fn validate_setting_value(key: &str, value: &Value) -> Result<(), ModelError> {
    if let Value::Object(map) = value
        && map.contains_key("size")
        && map.contains_key("unit")
    {
        let dimension: Dimension = serde_json::from_value(value.clone())
            .map_err(|e| ModelError::Validation(format!("invalid dimension for {key}: {e}")))?;
        Dimension::new(dimension.size, dimension.unit)
            .map_err(|e| ModelError::Validation(format!("invalid dimension for {key}: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn heading() -> PageElement {
        PageElement::new(
            WidgetKind::heading(),
            ElementContent::Text("New Heading".to_owned()),
            Settings::new().with("textAlign", "left"),
        )
    }

    #[test]
    fn test_update_field_is_pure() {
        let element = heading();
        let before = element.clone();

        let first = element.update_field("content", json!("Welcome")).unwrap();
        let second = element.update_field("content", json!("Welcome")).unwrap();

        assert_eq!(element, before, "input must never be mutated");
        assert_eq!(first, second, "same input, same output");
        assert_eq!(first.content.as_text(), Some("Welcome"));
    }

    #[test]
    fn test_update_settings_key_merges() {
        let element = heading();
        let updated = element
            .update_field("settings.color", json!("#ff0000"))
            .unwrap();

        assert_eq!(updated.settings.get_str("color"), Some("#ff0000"));
        // pre-existing key untouched
        assert_eq!(updated.settings.get_str("textAlign"), Some("left"));
    }

    #[test]
    fn test_update_whole_settings_replaces() {
        let element = heading();
        let updated = element
            .update_field("settings", json!({ "color": "#00ff00" }))
            .unwrap();

        assert_eq!(updated.settings.get_str("color"), Some("#00ff00"));
        assert_eq!(updated.settings.get_str("textAlign"), None);
    }

    #[test]
    fn test_update_content_subfield_requires_object() {
        let element = heading();
        let err = element
            .update_field("content.productId", json!("gid://shopify/Product/1"))
            .unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)));
    }

    #[test]
    fn test_update_content_subfield_on_object() {
        let element = PageElement::new(
            WidgetKind::shopify_product(),
            ElementContent::Object(serde_json::Map::new()),
            Settings::new(),
        );
        let updated = element
            .update_field("content.productId", json!("gid://shopify/Product/1"))
            .unwrap();
        assert_eq!(
            updated.content.get_str("productId"),
            Some("gid://shopify/Product/1")
        );
    }

    #[test]
    fn test_invalid_path_root() {
        let err = heading().update_field("style.color", json!("red")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidPath(_)));

        let err = heading().update_field("id", json!("nope")).unwrap_err();
        assert!(matches!(err, ModelError::InvalidPath(_)));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let err = heading()
            .update_field("settings.fontSize", json!({ "size": -4.0, "unit": "px" }))
            .unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)));
    }

    #[test]
    fn test_valid_dimension_accepted() {
        let updated = heading()
            .update_field("settings.fontSize", json!({ "size": 32.0, "unit": "px" }))
            .unwrap();
        assert_eq!(
            updated.settings.get_dimension("fontSize").unwrap().to_string(),
            "32px"
        );
    }

    #[test]
    fn test_empty_string_setting_counts_as_unset() {
        let settings = Settings::new().with("backgroundColor", "");
        assert_eq!(settings.get("backgroundColor"), None);
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_merged_over_defaults() {
        let defaults = Settings::new()
            .with("textAlign", "left")
            .with("color", "#111111");
        let stored = Settings::new()
            .with("textAlign", "center")
            .with("color", ""); // unset, falls through

        let merged = stored.merged_over(&defaults);
        assert_eq!(merged.get_str("textAlign"), Some("center"));
        assert_eq!(merged.get_str("color"), Some("#111111"));
    }

    #[test]
    fn test_content_serde_untagged() {
        let text: ElementContent = serde_json::from_value(json!("hello")).unwrap();
        assert_eq!(text, ElementContent::Text("hello".to_owned()));

        let object: ElementContent =
            serde_json::from_value(json!({ "productId": "1" })).unwrap();
        assert!(matches!(object, ElementContent::Object(_)));

        let children: ElementContent = serde_json::from_value(json!([])).unwrap();
        assert!(matches!(children, ElementContent::Children(_)));
    }

    #[test]
    fn test_element_serde_uses_type_field() {
        let element = heading();
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "heading");
    }
}
