//! Shared web-sys glue for the widget bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets attach `gloo-events` listeners to server-rendered markup. A
//! listener detaches when dropped, so every bound root is kept in a
//! page-level registry until a later scan finds it removed from the
//! document.

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent};

use crate::consts::BOUND_ATTR;
use crate::error::WidgetError;
use crate::geometry::{Point, Rect};

struct Binding {
    root: Element,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static BINDINGS: RefCell<Vec<Binding>> = const { RefCell::new(Vec::new()) };
}

/// Keep `listeners` alive for as long as `root` stays in the document.
///
/// # Errors
///
/// Returns [`WidgetError::Dom`] if the bound marker cannot be written.
pub fn register(root: &Element, listeners: Vec<EventListener>) -> Result<(), WidgetError> {
    root.set_attribute(BOUND_ATTR, "")?;
    BINDINGS.with_borrow_mut(|bindings| {
        bindings.push(Binding { root: root.clone(), _listeners: listeners });
    });
    Ok(())
}

/// Drop the listeners of roots that left the document. Returns how many were dropped.
pub fn prune_detached() -> usize {
    BINDINGS.with_borrow_mut(|bindings| {
        let before = bindings.len();
        bindings.retain(|binding| binding.root.is_connected());
        before - bindings.len()
    })
}

#[must_use]
pub fn is_bound(root: &Element) -> bool {
    root.has_attribute(BOUND_ATTR)
}

/// Every element in `doc` matching `selector`.
///
/// # Errors
///
/// Returns [`WidgetError::Dom`] for an invalid selector.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, WidgetError> {
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// The first descendant of `root` matching `selector`, cast to `T`.
///
/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when nothing matches or the
/// match is not a `T`.
pub fn find<T: JsCast + Clone>(root: &Element, selector: &'static str) -> Result<T, WidgetError> {
    root.query_selector(selector)?
        .and_then(|el| el.dyn_ref::<T>().cloned())
        .ok_or(WidgetError::MissingElement(selector))
}

/// Like [`find`], for elements the markup may leave out.
#[must_use]
pub fn find_optional<T: JsCast + Clone>(root: &Element, selector: &'static str) -> Option<T> {
    match find(root, selector) {
        Ok(el) => Some(el),
        Err(WidgetError::MissingElement(_)) => None,
        Err(err) => {
            log::warn!("{selector}: {err}");
            None
        }
    }
}

/// Page-space box of `el`, the equivalent of jQuery's `offset()` plus size.
#[must_use]
pub fn page_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    let (scroll_x, scroll_y) = web_sys::window().map_or((0.0, 0.0), |w| {
        (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0))
    });
    Rect {
        left: rect.left() + scroll_x,
        top: rect.top() + scroll_y,
        width: rect.width(),
        height: rect.height(),
    }
}

/// Page coordinates of a mouse event, or `None` for other event types.
#[must_use]
pub fn page_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.page_x()), f64::from(mouse.page_y())))
}

/// Add or remove a state class.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class {class} update failed: {err:?}");
    }
}

/// Set an attribute, logging instead of failing.
pub fn write_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("setting {name} failed: {err:?}");
    }
}
