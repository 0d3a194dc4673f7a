//! Browser widgets for the admin site.
//!
//! This crate is compiled to WebAssembly and loaded on admin change forms.
//! It binds to server-rendered markup and keeps hidden form fields in sync
//! with what the operator does on screen. The widget logic is plain Rust and
//! is tested natively. Browser glue lives behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`polygon`] | Polygon editor: click vertices on an image, serialize to an SVG polygon |
//! | [`ppoi`] | Point-of-interest picker storing percentage coordinates |
//! | [`filter_list`] | Collapsible filter blocks with state kept in local storage |
//! | [`geometry`] | Points, offsets, scale factor and click mapping |
//! | [`viewbox`] | SVG `viewBox` parsing and placeholder detection |
//! | [`config`] | Per-widget options read from a data attribute |
//! | [`storage`] | localStorage helpers (no-ops outside the browser) |
//! | [`error`] | Crate error type |
//! | [`consts`] | Selectors, class names and numeric constants |
//! | `dom` | Shared web-sys helpers and listener registry (hydrate only) |
//! | `bootstrap` | WASM start, page scan and the exported `init()` (hydrate only) |

#[cfg(feature = "hydrate")]
pub mod bootstrap;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod filter_list;
pub mod geometry;
pub mod polygon;
pub mod ppoi;
pub mod storage;
pub mod viewbox;
