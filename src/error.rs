//! Crate-level error type.
//!
//! Every failure stays local to the widget that hit it: bootstrap code logs
//! the error and moves on to the next instance.

use crate::viewbox::ViewBoxError;

/// Error raised while binding or resolving a widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A required child element is absent from the widget root.
    #[error("missing element {0}")]
    MissingElement(&'static str),
    /// A required attribute is absent from a widget element.
    #[error("missing attribute {0}")]
    MissingAttribute(&'static str),
    /// The overlay or fetched viewbox is malformed.
    #[error("invalid viewBox: {0}")]
    ViewBox(#[from] ViewBoxError),
    /// The viewbox parsed but the rendered width gives no usable scale.
    #[error("cannot derive scale from rendered width {0}")]
    NoScale(f64),
    /// The asynchronous viewbox fetch is disabled or has nowhere to go.
    #[error("viewBox fetch unavailable: {0}")]
    FetchUnavailable(&'static str),
    /// The image request failed or returned a non-success status.
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// The fetched body is not SVG or has no root viewBox.
    #[error("unreadable SVG: {0}")]
    Svg(String),
    /// A browser API call threw.
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
