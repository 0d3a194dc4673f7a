//! Polygon editor: click points on an image to build an SVG polygon.
//!
//! [`editor::EditorCore`] holds all state and logic and runs without a
//! browser. The `dom` module (hydrate only) binds one core per
//! `.block.js-sc` root and forwards pointer and button events into it.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod editor;
pub mod points;
