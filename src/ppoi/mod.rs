//! Primary point of interest: a single percentage position on an image.
//!
//! The backing column stores `"x,y"` where both numbers are percentages of
//! the image's width and height, so the point survives any resize of the
//! image itself.


#[cfg(feature = "hydrate")]
pub mod dom;

use std::fmt;

use crate::consts::PPOI_MAX_LEN;
use crate::geometry::{Point, Rect, round3};

/// Error returned by PPOI mapping or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PpoiError {
    /// The image has not been laid out yet.
    #[error("image has no rendered size")]
    EmptyImage,
    /// The saved value is not an `x,y` pair of numbers.
    #[error("malformed point of interest {0:?}")]
    Malformed(String),
    /// A saved percentage is outside `0..=100`.
    #[error("point of interest {0:?} is out of range")]
    OutOfRange(String),
    /// The saved value exceeds the column length.
    #[error("point of interest value is {0} chars, max {max}", max = PPOI_MAX_LEN)]
    TooLong(usize),
}

/// A position as percentages of the image size, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ppoi {
    pub x: f64,
    pub y: f64,
}

impl Ppoi {
    /// Convert a page-space click on `image` into percentages.
    ///
    /// Clicks past the image edge clamp to the nearest edge.
    ///
    /// # Errors
    ///
    /// Returns [`PpoiError::EmptyImage`] when the image has zero width or height.
    pub fn from_click(page: Point, image: Rect) -> Result<Self, PpoiError> {
        if image.width <= 0.0 || image.height <= 0.0 {
            return Err(PpoiError::EmptyImage);
        }
        let pct = |pos: f64, origin: f64, extent: f64| round3(((pos - origin) / extent * 100.0).clamp(0.0, 100.0));
        Ok(Self {
            x: pct(page.x, image.left, image.width),
            y: pct(page.y, image.top, image.height),
        })
    }

    /// Parse a saved field value. An empty value means no point is set.
    ///
    /// # Errors
    ///
    /// Returns [`PpoiError`] when the value is too long, not a numeric pair,
    /// or outside `0..=100`.
    pub fn parse_field(value: &str) -> Result<Option<Self>, PpoiError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if value.len() > PPOI_MAX_LEN {
            return Err(PpoiError::TooLong(value.len()));
        }
        let malformed = || PpoiError::Malformed(value.to_owned());
        let (x, y) = value.split_once(',').ok_or_else(malformed)?;
        let parse = |s: &str| match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(malformed()),
        };
        let (x, y) = (parse(x)?, parse(y)?);
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !(in_range(x) && in_range(y)) {
            return Err(PpoiError::OutOfRange(value.to_owned()));
        }
        Ok(Some(Self { x, y }))
    }

    /// CSS `left` / `top` values placing a marker on this point.
    #[must_use]
    pub fn marker_position(&self) -> (String, String) {
        (format!("{}%", self.x), format!("{}%", self.y))
    }
}

/// Formats as the field value, `x,y`.
impl fmt::Display for Ppoi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
