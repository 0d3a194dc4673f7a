//! Shared selectors, class names and numeric constants.

// ── Rounding ────────────────────────────────────────────────────

/// Stored coordinates keep three fractional digits.
pub const COORD_PRECISION: f64 = 1000.0;

// ── CSS state classes ───────────────────────────────────────────

/// Suffix-style state class added to the selected mode toggle.
pub const ACTIVE_CLASS: &str = "_active";

/// State class carried by a collapsed filter block.
pub const COLLAPSED_CLASS: &str = "_collapsed";

// ── Polygon editor markup ───────────────────────────────────────

pub const POLYGON_ROOT: &str = ".block.js-sc";
pub const POLYGON_INPUT: &str = ".js-sc-i";
pub const POLYGON_WRAPPER: &str = ".js-sc-wrapper";
pub const POLYGON_SVG: &str = ".js-sc-svg";
pub const POLYGON_SHAPE: &str = ".js-sc-polygon";
pub const POLYGON_IMAGE: &str = ".sc__image";
pub const POLYGON_UNDO: &str = ".js-sc-undo";
pub const POLYGON_REFRESH: &str = ".js-sc-refresh";
pub const POLYGON_TAG_TOGGLE: &str = ".js-sc-tag";
pub const POLYGON_POINTS_TOGGLE: &str = ".js-sc-points";

// ── Point-of-interest markup ────────────────────────────────────

pub const PPOI_ROOT: &str = ".js-ppoi";
pub const PPOI_IMAGE: &str = ".js-ppoi-image";
pub const PPOI_INPUT: &str = ".js-ppoi-i";
pub const PPOI_MARKER: &str = ".js-ppoi-marker";

/// Longest value the backing PPOI column accepts.
pub const PPOI_MAX_LEN: usize = 50;

// ── Filter list markup ──────────────────────────────────────────

pub const FILTER_BLOCK: &str = ".js-filter";
pub const FILTER_TOGGLE: &str = ".js-filter-toggle";
pub const FILTER_ID_ATTR: &str = "data-filter-id";

/// Local storage key holding the collapsed filter ids.
pub const FILTER_STORAGE_KEY: &str = "admin_widgets_filters";

// ── Bootstrap ───────────────────────────────────────────────────

/// Marker attribute set on every root once its listeners are attached.
pub const BOUND_ATTR: &str = "data-widget-bound";

/// Per-root JSON configuration attribute.
pub const CONFIG_ATTR: &str = "data-widget-config";

/// Attribute on `<html>` selecting the console log level.
pub const LOG_LEVEL_ATTR: &str = "data-widget-log";

/// Delay before the second page scan, for rows the admin adds late.
pub const RESCAN_DELAY_MS: u32 = 1000;
