//! Browser binding for one polygon editor root.
//!
//! ARCHITECTURE
//! ============
//! `PolygonWidget` owns the elements it writes plus an [`EditorCore`] behind
//! a `RefCell`. Event listeners and the viewbox fetch hold `Rc` clones of
//! it. Every handler borrows the core, runs one operation, releases the
//! borrow, then applies the returned [`Render`] to the DOM. No borrow is
//! held across the fetch's await points.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{DomParser, Element, HtmlInputElement, SupportedType};

use crate::config::WidgetConfig;
use crate::consts::{
    ACTIVE_CLASS, CONFIG_ATTR, POLYGON_IMAGE, POLYGON_INPUT, POLYGON_POINTS_TOGGLE, POLYGON_REFRESH, POLYGON_SHAPE,
    POLYGON_SVG, POLYGON_TAG_TOGGLE, POLYGON_UNDO, POLYGON_WRAPPER,
};
use crate::dom::{find, page_point, page_rect, set_class, write_attr};
use crate::error::WidgetError;
use crate::polygon::editor::{EditorCore, Render, Resolution};
use crate::polygon::points::DisplayMode;
use crate::viewbox::ViewBox;

struct PolygonWidget {
    core: RefCell<EditorCore>,
    input: HtmlInputElement,
    wrapper: Element,
    svg: Element,
    shape: Element,
    tag_toggle: Element,
    points_toggle: Element,
}

impl PolygonWidget {
    /// Run one editing operation and write its result.
    fn dispatch(&self, op: impl FnOnce(&mut EditorCore) -> Render) {
        let render = op(&mut *self.core.borrow_mut());
        self.apply(&render);
    }

    fn apply(&self, render: &Render) {
        write_attr(&self.shape, "points", &render.points_attr);
        self.input.set_value(&render.field_value);
        self.apply_mode(render.mode);
    }

    fn apply_mode(&self, mode: DisplayMode) {
        set_class(&self.tag_toggle, ACTIVE_CLASS, mode == DisplayMode::Tag);
        set_class(&self.points_toggle, ACTIVE_CLASS, mode == DisplayMode::Points);
    }
}

/// Bind the editor under `root` and return the listeners to keep alive.
///
/// # Errors
///
/// Returns [`WidgetError::MissingElement`] when the markup lacks a required
/// part. Viewbox problems are not errors here: they leave the editor
/// unresolved and are logged.
pub fn bind(root: &Element) -> Result<Vec<EventListener>, WidgetError> {
    let input: HtmlInputElement = find(root, POLYGON_INPUT)?;
    let wrapper: Element = find(root, POLYGON_WRAPPER)?;
    let svg: Element = find(root, POLYGON_SVG)?;
    let shape: Element = find(root, POLYGON_SHAPE)?;
    let undo: Element = find(root, POLYGON_UNDO)?;
    let refresh: Element = find(root, POLYGON_REFRESH)?;
    let tag_toggle: Element = find(root, POLYGON_TAG_TOGGLE)?;
    let points_toggle: Element = find(root, POLYGON_POINTS_TOGGLE)?;

    let config = WidgetConfig::from_attr_or_default(root.get_attribute(CONFIG_ATTR).as_deref());
    let mut core = EditorCore::new(config);
    let hydrated = config.hydrate_initial && hydrate(&mut core, &input.value());

    let rendered_width = f64::from(wrapper.client_width());
    let resolution = core.start(svg.get_attribute("viewBox").as_deref(), rendered_width);

    let widget = Rc::new(PolygonWidget {
        core: RefCell::new(core),
        input,
        wrapper,
        svg,
        shape,
        tag_toggle: tag_toggle.clone(),
        points_toggle: points_toggle.clone(),
    });

    // Leave a saved value untouched until the first edit, unless it was loaded.
    if hydrated {
        widget.dispatch(|core| core.render());
    } else {
        widget.apply_mode(config.initial_mode);
    }

    if let Ok(Resolution::NeedsFetch) = resolution {
        wasm_bindgen_futures::spawn_local(resolve_from_image(Rc::clone(&widget), root.clone()));
    }

    let on_click = {
        let widget = Rc::clone(&widget);
        let target = widget.svg.clone();
        EventListener::new(&target, "click", move |event| {
            let Some(page) = page_point(event) else {
                return;
            };
            let offset = page_rect(&widget.wrapper).offset();
            widget.dispatch(|core| core.click(page, offset).1);
        })
    };
    let on_undo = {
        let widget = Rc::clone(&widget);
        EventListener::new(&undo, "click", move |_| widget.dispatch(EditorCore::undo))
    };
    let on_refresh = {
        let widget = Rc::clone(&widget);
        EventListener::new(&refresh, "click", move |_| widget.dispatch(EditorCore::clear))
    };
    let on_tag = {
        let widget = Rc::clone(&widget);
        EventListener::new(&tag_toggle, "click", move |_| {
            widget.dispatch(|core| core.set_mode(DisplayMode::Tag));
        })
    };
    let on_points = EventListener::new(&points_toggle, "click", move |_| {
        widget.dispatch(|core| core.set_mode(DisplayMode::Points));
    });

    Ok(vec![on_click, on_undo, on_refresh, on_tag, on_points])
}

fn hydrate(core: &mut EditorCore, value: &str) -> bool {
    match core.hydrate(value) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("ignoring saved polygon: {err}");
            false
        }
    }
}

/// Fetch the image, copy its viewbox onto the overlay and finish resolution.
async fn resolve_from_image(widget: Rc<PolygonWidget>, root: Element) {
    let (attr, viewbox) = match fetch_viewbox(&root).await {
        Ok(found) => found,
        Err(err) => {
            widget.core.borrow_mut().fail_resolution(&err);
            return;
        }
    };
    if root.is_connected() {
        write_attr(&widget.svg, "viewBox", &attr);
    } else {
        log::debug!("polygon root detached before viewbox arrived");
    }
    // A failure here is already logged by the core.
    if let Ok(scale) = widget.core.borrow_mut().resolve_with(viewbox) {
        log::info!("polygon viewbox {attr} loaded; scale {}", scale.value());
    }
}

async fn fetch_viewbox(root: &Element) -> Result<(String, ViewBox), WidgetError> {
    let image = root
        .query_selector(POLYGON_IMAGE)?
        .ok_or(WidgetError::FetchUnavailable("no image element"))?;
    let src = image
        .get_attribute("src")
        .filter(|src| !src.is_empty())
        .ok_or(WidgetError::FetchUnavailable("image has no src"))?;

    let resp = gloo_net::http::Request::get(&src)
        .send()
        .await
        .map_err(|e| WidgetError::Fetch(e.to_string()))?;
    if !(200..300).contains(&resp.status()) {
        return Err(WidgetError::Fetch(format!("{src}: HTTP {}", resp.status())));
    }
    let body = resp.text().await.map_err(|e| WidgetError::Fetch(e.to_string()))?;

    let attr = root_viewbox(&body)?;
    let viewbox = attr.parse()?;
    Ok((attr, viewbox))
}

/// The `viewBox` of the first `<svg>` element in `markup`.
fn root_viewbox(markup: &str) -> Result<String, WidgetError> {
    let doc = DomParser::new()?.parse_from_string(markup, SupportedType::ImageSvgXml)?;
    let svg = doc
        .query_selector("svg")?
        .ok_or_else(|| WidgetError::Svg("no <svg> element".to_owned()))?;
    svg.get_attribute("viewBox")
        .ok_or_else(|| WidgetError::Svg("<svg> has no viewBox".to_owned()))
}
