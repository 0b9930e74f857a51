//! Pagesmith Core - Shared types library.
//!
//! This crate provides common types used across all Pagesmith components:
//! - `builder` - Page content model, widget catalog, renderer, publish pipeline
//! - `cli` - Command-line tools for seeding, rendering, and publishing pages
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, URL handles, CSS
//!   dimensions, and page statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
