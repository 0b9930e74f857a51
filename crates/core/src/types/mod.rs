//! Core types for Pagesmith.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod dimension;
pub mod handle;
pub mod id;
pub mod status;

pub use dimension::{CssUnit, Dimension, DimensionError};
pub use handle::{Handle, HandleError};
pub use id::*;
pub use status::*;
