//! The ordered point list and its two text serializations.

#[cfg(test)]
#[path = "points_test.rs"]
mod points_test;

use serde::Deserialize;

use crate::config::FieldFormat;
use crate::geometry::Point;

/// Which serialization the operator has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// `<polygon points="…"></polygon>`
    #[default]
    Tag,
    /// Bare `x,y x,y …` list.
    Points,
}

/// Error returned when an existing field value cannot seed the list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointParseError {
    /// The value looks like markup but has no `points` attribute.
    #[error("polygon tag has no points attribute")]
    MissingPointsAttr,
    /// A vertex is not an `x,y` pair of finite numbers.
    #[error("invalid vertex {0:?}")]
    InvalidPair(String),
}

/// Polygon vertices in click order.
///
/// Append-only apart from [`PointList::pop`] and [`PointList::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointList {
    points: Vec<Point>,
}

impl PointList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Remove the last vertex. Popping an empty list does nothing.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Value for the SVG `points` attribute: every pair followed by one space.
    #[must_use]
    pub fn points_attr(&self) -> String {
        self.points.iter().map(|p| format!("{p} ")).collect()
    }

    /// The polygon tag form, or an empty string for an empty list.
    #[must_use]
    pub fn tag(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(r#"<polygon points="{}"></polygon>"#, self.points_attr())
        }
    }

    /// Text for the backing form field.
    #[must_use]
    pub fn field_value(&self, mode: DisplayMode, format: FieldFormat) -> String {
        match (format, mode) {
            (FieldFormat::AlwaysTag, _) | (FieldFormat::FollowMode, DisplayMode::Tag) => self.tag(),
            (FieldFormat::FollowMode, DisplayMode::Points) => self.points_attr(),
        }
    }

    /// Rebuild a list from a saved field value, in either serialization.
    ///
    /// # Errors
    ///
    /// Returns [`PointParseError`] when the value is neither an empty string,
    /// a polygon tag, nor a whitespace-separated list of `x,y` pairs.
    pub fn parse_field(value: &str) -> Result<Self, PointParseError> {
        let trimmed = value.trim();
        let list = if trimmed.starts_with('<') {
            extract_points_attr(trimmed).ok_or(PointParseError::MissingPointsAttr)?
        } else {
            trimmed
        };
        let points = list.split_whitespace().map(parse_pair).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }
}

fn extract_points_attr(markup: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        let start = markup.find(&format!("points={quote}"))? + "points=".len() + 1;
        let len = markup[start..].find(quote)?;
        Some(&markup[start..start + len])
    })
}

fn parse_pair(pair: &str) -> Result<Point, PointParseError> {
    let invalid = || PointParseError::InvalidPair(pair.to_owned());
    let (x, y) = pair.split_once(',').ok_or_else(invalid)?;
    let coord = |s: &str| match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid()),
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}
