//! Status enums for pages.

use serde::{Deserialize, Serialize};

/// Page lifecycle status.
///
/// Pages are created as [`Draft`](Self::Draft) and transition to
/// [`Published`](Self::Published) only via an explicit publish operation,
/// which also pushes the serialized HTML to Shopify. A failed publish
/// leaves the page in `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

impl PageStatus {
    /// Whether this page has been pushed to the storefront.
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for PageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(format!("invalid page status: {s}")),
        }
    }
}
