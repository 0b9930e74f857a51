//! Pagesmith Builder - page content model and publish pipeline.
//!
//! This crate holds everything between a merchant's edit actions and the
//! `body_html` payload handed to Shopify's Pages API:
//!
//! - [`catalog`] - data-driven widget registry (defaults, field
//!   descriptors, renderers); adding a widget kind is one registry entry
//! - [`model`] - pages and elements, with pure create/update/delete/
//!   reorder operations (immutable updates, explicit empty-page state)
//! - [`render`] - element-to-HTML rendering with settings merging and a
//!   section depth guard
//! - [`serialize`] - page-to-`body_html` serialization and the
//!   best-effort, lossy reverse direction
//! - [`store`] - the persistence boundary (trait plus in-memory
//!   implementation with optimistic concurrency)
//! - [`shopify`] - the publish boundary (Admin REST Pages API client)
//! - [`service`] - save/publish orchestration that keeps save failures
//!   and publish failures distinguishable
//!
//! # Architecture
//!
//! The model, renderer, and serializer are synchronous pure functions of
//! their inputs; only the store/publish boundary is async. State is not
//! shared across edit sessions - each caller owns its page tree and
//! passes a store handle explicitly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod serialize;
pub mod service;
pub mod shopify;
pub mod store;

pub use catalog::{WidgetCatalog, WidgetKind};
pub use error::{BuilderError, Result};
pub use model::{ElementContent, ModelError, Page, PageContent, PageElement, Settings};
pub use render::Renderer;
