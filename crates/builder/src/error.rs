//! Crate-wide error type.
//!
//! The per-boundary errors ([`ModelError`], [`StoreError`],
//! [`PublishError`], [`ConfigError`]) stay distinct types; this enum
//! exists for callers like the CLI that thread several boundaries in one
//! flow and want a single `?`-friendly return type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::model::ModelError;
use crate::shopify::PublishError;
use crate::store::StoreError;

/// Convenience alias for builder results.
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Any error the builder can produce.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
