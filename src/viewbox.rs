//! SVG `viewBox` parsing.
//!
//! The admin renders the overlay with the image's stored dimensions, e.g.
//! `viewBox="0 0 1920 1080"`. When the dimensions are not stored (vector
//! images whose size was never read) the server falls back to
//! `viewBox="0 0 None None"`. That placeholder is recognised here so the
//! editor knows it must fetch the image and read the real viewbox from it.

#[cfg(test)]
#[path = "viewbox_test.rs"]
mod viewbox_test;

use std::fmt;
use std::str::FromStr;

use crate::geometry::ScaleFactor;

/// Token the server writes in place of an unknown dimension.
const PLACEHOLDER_TOKEN: &str = "None";

/// Error returned when a `viewBox` attribute cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewBoxError {
    /// The attribute does not have exactly four components.
    #[error("expected 4 viewBox components, found {0}")]
    ComponentCount(usize),
    /// A component is not a number.
    #[error("invalid viewBox component {0:?}")]
    InvalidNumber(String),
    /// The width is zero or negative.
    #[error("viewBox width must be positive, got {0}")]
    NonPositiveWidth(f64),
}

/// Split a `viewBox` value on whitespace and/or commas.
fn components(attr: &str) -> impl Iterator<Item = &str> {
    attr.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty())
}

/// The four numbers of an SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Scale factor for this viewbox drawn `rendered_width` pixels wide.
    #[must_use]
    pub fn scale_for(&self, rendered_width: f64) -> Option<ScaleFactor> {
        ScaleFactor::from_widths(self.width, rendered_width)
    }
}

impl FromStr for ViewBox {
    type Err = ViewBoxError;

    /// Parse `min-x min-y width height`, separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = components(s).collect();
        if parts.len() != 4 {
            return Err(ViewBoxError::ComponentCount(parts.len()));
        }
        let mut nums = [0.0_f64; 4];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = match part.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => return Err(ViewBoxError::InvalidNumber((*part).to_owned())),
            };
        }
        let [min_x, min_y, width, height] = nums;
        if width <= 0.0 {
            return Err(ViewBoxError::NonPositiveWidth(width));
        }
        Ok(Self { min_x, min_y, width, height })
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// What the overlay's `viewBox` attribute says about the native space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewBoxAttr {
    /// Dimensions are known; the scale can be computed right away.
    Known(ViewBox),
    /// The server did not know the dimensions; the image must be fetched.
    Placeholder,
}

impl ViewBoxAttr {
    /// Classify the overlay attribute. A missing attribute counts as a placeholder.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewBoxError`] when the attribute is neither a placeholder
    /// nor a valid viewbox.
    pub fn classify(attr: Option<&str>) -> Result<Self, ViewBoxError> {
        let Some(attr) = attr else {
            return Ok(Self::Placeholder);
        };
        let width_token = components(attr).nth(2);
        if width_token.is_none_or(|w| w.contains(PLACEHOLDER_TOKEN)) {
            return Ok(Self::Placeholder);
        }
        attr.parse().map(Self::Known)
    }
}
