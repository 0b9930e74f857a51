//! Pages: ordered element lists with lifecycle metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use pagesmith_core::{ElementId, Handle, PageId, PageStatus, RemotePageId};

use super::element::PageElement;
use super::ModelError;

/// Version of the content/settings schema written by this widget catalog.
///
/// Stored on every page and embedded in the serialized artifact so the
/// deserializer can detect content written by a newer catalog and refuse
/// to mis-parse it.
pub const SCHEMA_VERSION: u32 = 1;

/// The content of a page: either explicitly empty, or a non-empty
/// ordered list of elements.
///
/// The empty state is a distinct marker, not a zero-length list, so the
/// UI can render its empty-state affordance deterministically. All
/// constructors and operations maintain the invariant that
/// `Elements(...)` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "PageContentRepr")]
pub enum PageContent {
    #[default]
    Empty,
    Elements(Vec<PageElement>),
}

/// Wire form of [`PageContent`]. Hand-edited page files can carry
/// `{"elements": []}`; deserialization routes through
/// [`PageContent::from_elements`] so that still lands on the empty marker.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum PageContentRepr {
    Empty,
    Elements(Vec<PageElement>),
}

impl From<PageContentRepr> for PageContent {
    fn from(repr: PageContentRepr) -> Self {
        match repr {
            PageContentRepr::Empty => Self::Empty,
            PageContentRepr::Elements(elements) => Self::from_elements(elements),
        }
    }
}

impl PageContent {
    /// Build content from a list, collapsing an empty list to [`Self::Empty`].
    #[must_use]
    pub fn from_elements(elements: Vec<PageElement>) -> Self {
        if elements.is_empty() {
            Self::Empty
        } else {
            Self::Elements(elements)
        }
    }

    /// Top-level elements (empty slice for the empty state).
    #[must_use]
    pub fn elements(&self) -> &[PageElement] {
        match self {
            Self::Empty => &[],
            Self::Elements(elements) => elements,
        }
    }

    /// Number of top-level elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Whether the page has no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Find an element by id, descending into section children.
    #[must_use]
    pub fn find(&self, id: ElementId) -> Option<&PageElement> {
        find_in(self.elements(), id)
    }

    /// Return new content with an element appended at the top level.
    #[must_use]
    pub fn appended(&self, element: PageElement) -> Self {
        let mut elements = self.elements().to_vec();
        elements.push(element);
        Self::Elements(elements)
    }

    /// Return new content with an element inserted at a top-level index
    /// (clamped to the list length).
    #[must_use]
    pub fn inserted(&self, index: usize, element: PageElement) -> Self {
        let mut elements = self.elements().to_vec();
        let index = index.min(elements.len());
        elements.insert(index, element);
        Self::Elements(elements)
    }

    /// Return new content with the addressed element removed.
    ///
    /// Descends into section children. Removing the last remaining
    /// element yields the explicit [`Self::Empty`] marker.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ElementNotFound`] if no element has this id.
    pub fn delete(&self, id: ElementId) -> Result<Self, ModelError> {
        let (elements, found) = delete_in(self.elements(), id);
        if !found {
            return Err(ModelError::ElementNotFound(id));
        }
        Ok(Self::from_elements(elements))
    }

    /// Return new content with the addressed element moved to
    /// `target_index` within its sibling list.
    ///
    /// The relative order of all other elements is preserved; the target
    /// index is clamped to the sibling list bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ElementNotFound`] if no element has this id.
    pub fn reorder(&self, id: ElementId, target_index: usize) -> Result<Self, ModelError> {
        let (elements, found) = reorder_in(self.elements(), id, target_index);
        if !found {
            return Err(ModelError::ElementNotFound(id));
        }
        Ok(Self::from_elements(elements))
    }

    /// Return new content with one field of the addressed element
    /// updated (see [`PageElement::update_field`] for path semantics).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ElementNotFound`] if no element has this
    /// id, or the update's own validation error.
    pub fn update_field(
        &self,
        id: ElementId,
        path: &str,
        value: Value,
    ) -> Result<Self, ModelError> {
        let (elements, found) = update_in(self.elements(), id, path, &value)?;
        if !found {
            return Err(ModelError::ElementNotFound(id));
        }
        Ok(Self::from_elements(elements))
    }
}

fn find_in(list: &[PageElement], id: ElementId) -> Option<&PageElement> {
    for element in list {
        if element.id == id {
            return Some(element);
        }
        if let Some(children) = element.content.as_children()
            && let Some(found) = find_in(children, id)
        {
            return Some(found);
        }
    }
    None
}

fn delete_in(list: &[PageElement], id: ElementId) -> (Vec<PageElement>, bool) {
    let mut found = false;
    let mut result = Vec::with_capacity(list.len());

    for element in list {
        if element.id == id {
            found = true;
            continue;
        }
        if !found && let Some(children) = element.content.as_children() {
            let (new_children, child_found) = delete_in(children, id);
            if child_found {
                found = true;
                let mut updated = element.clone();
                updated.content = super::element::ElementContent::Children(new_children);
                result.push(updated);
                continue;
            }
        }
        result.push(element.clone());
    }

    (result, found)
}

fn reorder_in(list: &[PageElement], id: ElementId, target_index: usize) -> (Vec<PageElement>, bool) {
    if let Some(position) = list.iter().position(|e| e.id == id) {
        let mut elements = list.to_vec();
        let element = elements.remove(position);
        let target = target_index.min(elements.len());
        elements.insert(target, element);
        return (elements, true);
    }

    let mut found = false;
    let mut result = Vec::with_capacity(list.len());
    for element in list {
        if !found && let Some(children) = element.content.as_children() {
            let (new_children, child_found) = reorder_in(children, id, target_index);
            if child_found {
                found = true;
                let mut updated = element.clone();
                updated.content = super::element::ElementContent::Children(new_children);
                result.push(updated);
                continue;
            }
        }
        result.push(element.clone());
    }
    (result, found)
}

fn update_in(
    list: &[PageElement],
    id: ElementId,
    path: &str,
    value: &Value,
) -> Result<(Vec<PageElement>, bool), ModelError> {
    let mut found = false;
    let mut result = Vec::with_capacity(list.len());

    for element in list {
        if element.id == id {
            found = true;
            result.push(element.update_field(path, value.clone())?);
            continue;
        }
        if !found && let Some(children) = element.content.as_children() {
            let (new_children, child_found) = update_in(children, id, path, value)?;
            if child_found {
                found = true;
                let mut updated = element.clone();
                updated.content = super::element::ElementContent::Children(new_children);
                result.push(updated);
                continue;
            }
        }
        result.push(element.clone());
    }

    Ok((result, found))
}

/// Shopify's copy of a published page.
///
/// The local page and the remote copy are independently-lifecycled
/// representations; this record is refreshed on every successful publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePage {
    pub id: RemotePageId,
    pub url: String,
}

/// A builder page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub handle: Handle,
    pub status: PageStatus,
    pub content: PageContent,
    /// Content schema version written by the current widget catalog.
    pub schema_version: u32,
    /// Shopify's identifier/URL for the published copy, once synced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemotePage>,
    /// Optimistic-concurrency token, bumped by the store on every
    /// effective save.
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Create an empty draft page.
    #[must_use]
    pub fn new(title: impl Into<String>, handle: Handle) -> Self {
        let now = Utc::now();
        Self {
            id: PageId::generate(),
            title: title.into(),
            handle,
            status: PageStatus::Draft,
            content: PageContent::Empty,
            schema_version: SCHEMA_VERSION,
            remote: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy of this page with new content.
    #[must_use]
    pub fn with_content(mut self, content: PageContent) -> Self {
        self.content = content;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::element::{ElementContent, Settings};
    use super::*;
    use crate::catalog::WidgetKind;

    fn text_element(body: &str) -> PageElement {
        PageElement::new(
            WidgetKind::text(),
            ElementContent::Text(body.to_owned()),
            Settings::new(),
        )
    }

    fn section(children: Vec<PageElement>) -> PageElement {
        PageElement::new(
            WidgetKind::section(),
            ElementContent::Children(children),
            Settings::new(),
        )
    }

    #[test]
    fn test_from_elements_collapses_empty() {
        assert_eq!(PageContent::from_elements(vec![]), PageContent::Empty);
    }

    #[test]
    fn test_deserialize_empty_element_list_as_empty_marker() {
        let content: PageContent = serde_json::from_value(serde_json::json!({ "elements": [] })).unwrap();
        assert_eq!(content, PageContent::Empty);
        assert!(content.is_empty());

        let json = serde_json::to_value(PageContent::from_elements(vec![text_element("a")])).unwrap();
        let back: PageContent = serde_json::from_value(json).unwrap();
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn test_delete_last_element_yields_empty_marker() {
        let element = text_element("only");
        let id = element.id;
        let content = PageContent::from_elements(vec![element]);

        let after = content.delete(id).unwrap();
        assert_eq!(after, PageContent::Empty);
        assert!(after.is_empty());
    }

    #[test]
    fn test_delete_missing_element() {
        let content = PageContent::from_elements(vec![text_element("a")]);
        let err = content.delete(ElementId::generate()).unwrap_err();
        assert!(matches!(err, ModelError::ElementNotFound(_)));
    }

    #[test]
    fn test_delete_descends_into_sections() {
        let child = text_element("inner");
        let child_id = child.id;
        let content = PageContent::from_elements(vec![section(vec![child, text_element("kept")])]);

        let after = content.delete(child_id).unwrap();
        let children = after.elements()[0].content.as_children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].content.as_text(), Some("kept"));
    }

    #[test]
    fn test_reorder_preserves_other_order() {
        let a = text_element("a");
        let b = text_element("b");
        let c = text_element("c");
        let (id_a, id_b, id_c) = (a.id, b.id, c.id);
        let content = PageContent::from_elements(vec![a, b, c]);

        let after = content.reorder(id_c, 0).unwrap();
        let ids: Vec<ElementId> = after.elements().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![id_c, id_a, id_b]);

        // multiset of ids preserved
        let mut before_ids = vec![id_a, id_b, id_c];
        let mut after_ids = ids;
        before_ids.sort();
        after_ids.sort();
        assert_eq!(before_ids, after_ids);
    }

    #[test]
    fn test_reorder_clamps_target_index() {
        let a = text_element("a");
        let b = text_element("b");
        let id_a = a.id;
        let content = PageContent::from_elements(vec![a, b]);

        let after = content.reorder(id_a, 99).unwrap();
        assert_eq!(after.elements()[1].id, id_a);
    }

    #[test]
    fn test_reorder_within_section_siblings() {
        let x = text_element("x");
        let y = text_element("y");
        let (id_x, id_y) = (x.id, y.id);
        let content = PageContent::from_elements(vec![section(vec![x, y])]);

        let after = content.reorder(id_y, 0).unwrap();
        let children = after.elements()[0].content.as_children().unwrap();
        assert_eq!(children[0].id, id_y);
        assert_eq!(children[1].id, id_x);
    }

    #[test]
    fn test_update_field_through_section() {
        let child = text_element("before");
        let child_id = child.id;
        let content = PageContent::from_elements(vec![section(vec![child])]);

        let after = content
            .update_field(child_id, "content", serde_json::json!("after"))
            .unwrap();
        let children = after.elements()[0].content.as_children().unwrap();
        assert_eq!(children[0].content.as_text(), Some("after"));
        // id stable across updates
        assert_eq!(children[0].id, child_id);
    }

    #[test]
    fn test_find_recursive() {
        let child = text_element("inner");
        let child_id = child.id;
        let content = PageContent::from_elements(vec![section(vec![section(vec![child])])]);
        assert!(content.find(child_id).is_some());
        assert!(content.find(ElementId::generate()).is_none());
    }

    #[test]
    fn test_new_page_is_empty_draft() {
        let page = Page::new("About Us", Handle::from_title("About Us"));
        assert_eq!(page.status, PageStatus::Draft);
        assert_eq!(page.content, PageContent::Empty);
        assert_eq!(page.schema_version, SCHEMA_VERSION);
        assert_eq!(page.version, 0);
        assert!(page.remote.is_none());
    }

    #[test]
    fn test_page_serde_camel_case() {
        let page = Page::new("About", Handle::from_title("About"));
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("schemaVersion").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("remote").is_none(), "unset remote is omitted");
    }
}
