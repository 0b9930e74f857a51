//! Page handle (URL slug) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Handle`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleError {
    /// The input string is empty.
    #[error("handle cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("handle must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("handle may only contain lowercase letters, digits, and hyphens (got {0:?})")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen.
    #[error("handle cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A page URL handle: lowercase, hyphenated, unique per shop.
///
/// Matches the slug rules Shopify applies to page handles, so the handle
/// we store is the handle the storefront serves.
///
/// ## Examples
///
/// ```
/// use pagesmith_core::Handle;
///
/// assert!(Handle::parse("about-us").is_ok());
/// assert!(Handle::parse("About Us").is_err());   // uppercase + space
/// assert!(Handle::parse("-leading").is_err());   // edge hyphen
///
/// // Derive a handle from a page title instead
/// assert_eq!(Handle::from_title("About Us!").as_str(), "about-us");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Maximum length of a handle (Shopify limit).
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `Handle` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains a
    /// character outside `[a-z0-9-]`, or starts/ends with a hyphen.
    pub fn parse(s: &str) -> Result<Self, HandleError> {
        if s.is_empty() {
            return Err(HandleError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(HandleError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(HandleError::InvalidCharacter(bad));
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(HandleError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Derive a handle from a human-readable title.
    ///
    /// Lowercases, maps runs of non-alphanumeric characters to single
    /// hyphens, and trims edge hyphens. Falls back to `"page"` when the
    /// title contains no usable characters.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len());
        let mut last_was_hyphen = true; // suppress a leading hyphen

        for c in title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
                last_was_hyphen = false;
            } else if !last_was_hyphen {
                slug.push('-');
                last_was_hyphen = true;
            }
        }

        // Truncation can expose a new trailing hyphen, so trim after it
        slug.truncate(Self::MAX_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }

        if slug.is_empty() {
            slug.push_str("page");
        }

        Self(slug)
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Handle` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Handle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
