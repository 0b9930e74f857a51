//! Page content model.
//!
//! A page is an ordered list of typed elements; each element carries a
//! content payload (shape determined by its widget kind) and a settings
//! map (style/config keys with render-time defaults). The only recursive
//! relationship is the `section` kind, whose content is itself a list of
//! elements.
//!
//! All mutation operations are immutable: they return new values and
//! never touch their input, so undo/redo and concurrent preview
//! rendering stay safe.

pub mod element;
pub mod page;

pub use element::{ElementContent, PageElement, Settings};
pub use page::{Page, PageContent, RemotePage, SCHEMA_VERSION};

use pagesmith_core::ElementId;

/// Errors from model operations.
///
/// Missing optional settings never error (defaults absorb them at render
/// time); these are reserved for structurally wrong input.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A field value is malformed for its destination (wrong shape,
    /// negative size, invalid enum value).
    #[error("validation error: {0}")]
    Validation(String),

    /// A field path does not address `content`, `settings`, or a
    /// subfield of either.
    #[error("invalid field path: {0:?}")]
    InvalidPath(String),

    /// The addressed element does not exist in the page content.
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    /// Strict validation was asked about a kind the catalog has never
    /// registered. Render-time handling of the same situation is
    /// non-fatal (a tagged placeholder).
    #[error("unknown widget kind: {0}")]
    UnknownWidget(crate::catalog::WidgetKind),
}
