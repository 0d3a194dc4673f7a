use gloo_events::EventListener;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::consts::{PPOI_IMAGE, PPOI_INPUT, PPOI_MARKER};
use crate::dom::{find, find_optional, page_point, page_rect};
use crate::error::WidgetError;
use crate::ppoi::Ppoi;

/// Bind the picker under `root` and return its listener.
///
/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when the image or input is absent.
pub fn bind(root: &Element) -> Result<Vec<EventListener>, WidgetError> {
    let image: Element = find(root, PPOI_IMAGE)?;
    let input: HtmlInputElement = find(root, PPOI_INPUT)?;
    let marker: Option<HtmlElement> = find_optional(root, PPOI_MARKER);

    match Ppoi::parse_field(&input.value()) {
        Ok(Some(ppoi)) => place_marker(marker.as_ref(), ppoi),
        Ok(None) => {}
        Err(err) => log::warn!("ignoring saved point of interest: {err}"),
    }

    let target = image.clone();
    let listener = EventListener::new(&target, "click", move |event| {
        let Some(page) = page_point(event) else {
            return;
        };
        match Ppoi::from_click(page, page_rect(&image)) {
            Ok(ppoi) => {
                input.set_value(&ppoi.to_string());
                place_marker(marker.as_ref(), ppoi);
            }
            Err(err) => log::debug!("point of interest click ignored: {err}"),
        }
    });
    Ok(vec![listener])
}

fn place_marker(marker: Option<&HtmlElement>, ppoi: Ppoi) {
    let Some(marker) = marker else {
        return;
    };
    let (left, top) = ppoi.marker_position();
    let style = marker.style();
    for (name, value) in [("left", left), ("top", top)] {
        if let Err(err) = style.set_property(name, &value) {
            log::warn!("marker {name} update failed: {err:?}");
        }
    }
}
