//! Per-widget configuration.
//!
//! Each polygon root may carry a `data-widget-config` attribute holding a
//! JSON object. Unknown keys are ignored and missing keys take their
//! defaults, so `{}` and an absent attribute mean the same thing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::polygon::points::DisplayMode;

/// Error returned when the configuration attribute is not valid JSON.
#[derive(Debug, thiserror::Error)]
#[error("invalid widget config: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

/// Which serialization the backing field receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    /// Always write the `<polygon points="…"></polygon>` tag, whatever the mode.
    #[default]
    AlwaysTag,
    /// Write the tag in `tag` mode and the bare point list in `points` mode.
    FollowMode,
}

/// Options for one polygon editor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub field_format: FieldFormat,
    /// Seed the point list from the field's existing value.
    pub hydrate_initial: bool,
    /// Fetch the image to resolve a placeholder viewbox.
    pub fetch_viewbox: bool,
    pub initial_mode: DisplayMode,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            field_format: FieldFormat::default(),
            hydrate_initial: false,
            fetch_viewbox: true,
            initial_mode: DisplayMode::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse the raw attribute value. `None` or blank yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the attribute is present but malformed.
    pub fn from_attr(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    /// Like [`Self::from_attr`], but falls back to defaults on error.
    #[must_use]
    pub fn from_attr_or_default(raw: Option<&str>) -> Self {
        Self::from_attr(raw).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            Self::default()
        })
    }
}
