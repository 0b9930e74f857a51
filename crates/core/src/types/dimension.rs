//! CSS dimension type for slider-driven size settings.
//!
//! Numeric/unit settings (`fontSize`, `padding`, widths) are stored as
//! `{ "size": 24, "unit": "px" }` pairs and rendered as `24px`. The unit
//! stored with the value is the unit that renders; there is no silent
//! unit default that differs from the stored one.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Dimension`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// The size is negative.
    #[error("dimension size cannot be negative (got {0})")]
    Negative(f64),
    /// The size is not a finite number.
    #[error("dimension size must be finite (got {0})")]
    NotFinite(f64),
}

/// CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CssUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "vw")]
    Vw,
    #[serde(rename = "vh")]
    Vh,
}

impl CssUnit {
    /// The unit suffix as written in CSS.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Percent => "%",
            Self::Vw => "vw",
            Self::Vh => "vh",
        }
    }
}

impl fmt::Display for CssUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A CSS length: a non-negative size paired with its unit.
///
/// ## Examples
///
/// ```
/// use pagesmith_core::{CssUnit, Dimension};
///
/// let font_size = Dimension::new(24.0, CssUnit::Px).unwrap();
/// assert_eq!(font_size.to_string(), "24px");
///
/// let width = Dimension::new(62.5, CssUnit::Percent).unwrap();
/// assert_eq!(width.to_string(), "62.5%");
///
/// assert!(Dimension::new(-4.0, CssUnit::Px).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub size: f64,
    pub unit: CssUnit,
}

impl Dimension {
    /// Create a dimension, validating the size.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Negative`] for negative sizes and
    /// [`DimensionError::NotFinite`] for NaN/infinite sizes.
    pub fn new(size: f64, unit: CssUnit) -> Result<Self, DimensionError> {
        if !size.is_finite() {
            return Err(DimensionError::NotFinite(size));
        }
        if size < 0.0 {
            return Err(DimensionError::Negative(size));
        }
        Ok(Self { size, unit })
    }

    /// Create a whole-pixel dimension.
    #[must_use]
    pub fn px(size: u32) -> Self {
        Self {
            size: f64::from(size),
            unit: CssUnit::Px,
        }
    }

    /// Create a percentage dimension.
    #[must_use]
    pub fn percent(size: u32) -> Self {
        Self {
            size: f64::from(size),
            unit: CssUnit::Percent,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trim trailing ".0" so 24.0px renders as the CSS-valid "24px"
        if self.size.fract() == 0.0 {
            write!(f, "{}{}", self.size as i64, self.unit)
        } else {
            write!(f, "{}{}", self.size, self.unit)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_whole_numbers() {
        assert_eq!(Dimension::px(24).to_string(), "24px");
        assert_eq!(Dimension::percent(100).to_string(), "100%");
    }

    #[test]
    fn test_display_keeps_fractions() {
        let d = Dimension::new(1.5, CssUnit::Rem).unwrap();
        assert_eq!(d.to_string(), "1.5rem");
    }

    #[test]
    fn test_negative_size_rejected() {
        assert_eq!(
            Dimension::new(-1.0, CssUnit::Px),
            Err(DimensionError::Negative(-1.0))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Dimension::new(f64::NAN, CssUnit::Px),
            Err(DimensionError::NotFinite(_))
        ));
    }

    #[test]
    fn test_serde_shape() {
        let d = Dimension::px(24);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json, serde_json::json!({ "size": 24.0, "unit": "px" }));

        let parsed: Dimension = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_percent_unit_serializes_as_symbol() {
        let d = Dimension::percent(50);
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"%\""));
    }
}
