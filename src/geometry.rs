//! Coordinate types and the click-to-native mapping.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;

use crate::consts::COORD_PRECISION;

/// A point in page pixels or in the image's native coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Formats as `x,y`, the pair syntax of an SVG `points` attribute.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Top-left corner of a widget on the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

/// A page-space box, as reported by the browser for a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn offset(&self) -> Offset {
        Offset { left: self.left, top: self.top }
    }
}

/// Ratio of native units per rendered pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Scale for an image `native_width` units wide drawn `rendered_width` pixels wide.
    ///
    /// Returns `None` when either width is not a positive finite number.
    #[must_use]
    pub fn from_widths(native_width: f64, rendered_width: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(native_width) && valid(rendered_width) {
            Some(Self(native_width / rendered_width))
        } else {
            None
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Round to three fractional digits, halves toward positive infinity.
///
/// `floor(x + 0.5)` never yields -0.0, so results never serialize as "-0".
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * COORD_PRECISION + 0.5).floor() / COORD_PRECISION
}

/// Map a page-space click into native coordinates.
///
/// No clamping: clicks that land outside the image map outside its extents.
#[must_use]
pub fn map_click(page: Point, offset: Offset, scale: ScaleFactor) -> Point {
    let relative_x = page.x - offset.left;
    let relative_y = page.y - offset.top;
    Point {
        x: round3(relative_x * scale.value()),
        y: round3(relative_y * scale.value()),
    }
}
