//! Editor state machine and editing operations.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized → Ready` when the overlay already carries a real viewbox.
//! `Uninitialized → Resolving → Ready` when the viewbox has to be fetched.
//! `Resolving → Failed` when the fetch or parse goes wrong; there is no retry.
//!
//! Clicks are only mapped in `Ready`. In every other state they are dropped
//! and reported as [`ClickOutcome::NotReady`], so an operator clicking while
//! the image is still loading never gets a bogus vertex in the field.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::geometry::{Offset, Point, ScaleFactor, map_click};
use crate::polygon::points::{DisplayMode, PointList, PointParseError};
use crate::viewbox::{ViewBox, ViewBoxAttr};

/// Where the editor is in resolving the image's native coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolveState {
    Uninitialized,
    /// Waiting on the image fetch.
    Resolving,
    Ready(ScaleFactor),
    /// Resolution gave up; clicks stay unmapped for the life of the widget.
    Failed,
}

/// What [`EditorCore::start`] decided about the viewbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The scale is known and the editor is ready.
    Ready(ScaleFactor),
    /// The host must fetch the image and call [`EditorCore::resolve_with`].
    NeedsFetch,
}

/// Result of dispatching a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Added(Point),
    NotReady,
}

/// Everything the DOM layer writes after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    /// Value for the overlay polygon's `points` attribute.
    pub points_attr: String,
    /// Value for the backing input.
    pub field_value: String,
    /// Mode whose toggle carries the active class.
    pub mode: DisplayMode,
}

/// One polygon editor instance. Holds no browser handles.
#[derive(Debug, Clone)]
pub struct EditorCore {
    points: PointList,
    mode: DisplayMode,
    state: ResolveState,
    rendered_width: f64,
    config: WidgetConfig,
}

impl EditorCore {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            points: PointList::new(),
            mode: config.initial_mode,
            state: ResolveState::Uninitialized,
            rendered_width: 0.0,
            config,
        }
    }

    /// Seed the list from the backing field's saved value.
    ///
    /// Does nothing unless `hydrate_initial` is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`PointParseError`] if the value is malformed; the list is left empty.
    pub fn hydrate(&mut self, field_value: &str) -> Result<(), PointParseError> {
        if !self.config.hydrate_initial {
            return Ok(());
        }
        self.points = PointList::parse_field(field_value)?;
        log::debug!("hydrated {} point(s) from field", self.points.len());
        Ok(())
    }

    // --- Resolution transitions ---

    /// Inspect the overlay's `viewBox` and either become ready or ask for a fetch.
    ///
    /// `rendered_width` is the wrapper's on-screen width in CSS pixels; it is
    /// kept for the asynchronous path.
    ///
    /// # Errors
    ///
    /// Moves to `Failed` and returns an error when the attribute is malformed,
    /// the rendered width yields no scale, or the fetch path is disabled.
    pub fn start(&mut self, viewbox_attr: Option<&str>, rendered_width: f64) -> Result<Resolution, WidgetError> {
        self.rendered_width = rendered_width;
        let attr = match ViewBoxAttr::classify(viewbox_attr) {
            Ok(attr) => attr,
            Err(err) => return Err(self.fail(err.into())),
        };
        match attr {
            ViewBoxAttr::Known(viewbox) => self.resolve_with(viewbox).map(Resolution::Ready),
            ViewBoxAttr::Placeholder if self.config.fetch_viewbox => {
                self.begin_resolving();
                Ok(Resolution::NeedsFetch)
            }
            ViewBoxAttr::Placeholder => Err(self.fail(WidgetError::FetchUnavailable("disabled by config"))),
        }
    }

    /// Enter `Resolving` while the image fetch is in flight.
    pub fn begin_resolving(&mut self) {
        log::debug!("viewbox placeholder; resolving from image");
        self.state = ResolveState::Resolving;
    }

    /// Finish resolution with a known viewbox.
    ///
    /// # Errors
    ///
    /// Moves to `Failed` and returns [`WidgetError::NoScale`] when the
    /// stored rendered width cannot produce a scale.
    pub fn resolve_with(&mut self, viewbox: ViewBox) -> Result<ScaleFactor, WidgetError> {
        match viewbox.scale_for(self.rendered_width) {
            Some(scale) => {
                log::debug!("viewbox {viewbox} resolved; scale {}", scale.value());
                self.state = ResolveState::Ready(scale);
                Ok(scale)
            }
            None => Err(self.fail(WidgetError::NoScale(self.rendered_width))),
        }
    }

    /// Give up on resolution. Later clicks are dropped.
    pub fn fail_resolution(&mut self, err: &WidgetError) {
        log::warn!("polygon viewbox unresolved: {err}");
        self.state = ResolveState::Failed;
    }

    fn fail(&mut self, err: WidgetError) -> WidgetError {
        self.fail_resolution(&err);
        err
    }

    // --- Editing ---

    /// Map a page-space click and append it when the scale is known.
    pub fn click(&mut self, page: Point, offset: Offset) -> (ClickOutcome, Render) {
        let outcome = match self.state {
            ResolveState::Ready(scale) => {
                let point = map_click(page, offset, scale);
                self.points.push(point);
                ClickOutcome::Added(point)
            }
            state => {
                log::debug!("click dropped while {state:?}");
                ClickOutcome::NotReady
            }
        };
        (outcome, self.render())
    }

    /// Append a point that is already in native coordinates.
    pub fn add_point(&mut self, point: Point) -> Render {
        self.points.push(point);
        self.render()
    }

    pub fn undo(&mut self) -> Render {
        self.points.pop();
        self.render()
    }

    pub fn clear(&mut self) -> Render {
        self.points.clear();
        self.render()
    }

    /// Switch the display mode. The point list is untouched.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Render {
        self.mode = mode;
        self.render()
    }

    /// Current outputs for the overlay, the field and the toggles.
    #[must_use]
    pub fn render(&self) -> Render {
        Render {
            points_attr: self.points.points_attr(),
            field_value: self.points.field_value(self.mode, self.config.field_format),
            mode: self.mode,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> ResolveState {
        self.state
    }

    #[must_use]
    pub fn points(&self) -> &PointList {
        &self.points
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ResolveState::Ready(_))
    }
}
