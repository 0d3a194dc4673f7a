//! WASM entry points and page scanning.
//!
//! The module starts on load, scans the page once right away and once more
//! after [`RESCAN_DELAY_MS`], and exports `init()` so the admin's inline
//! formset hook can rescan when it adds a row. Scans only bind roots
//! without the bound marker, so calling `init()` repeatedly is safe.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::consts::{FILTER_BLOCK, LOG_LEVEL_ATTR, POLYGON_ROOT, PPOI_ROOT, RESCAN_DELAY_MS};
use crate::dom::{is_bound, prune_detached, query_all, register};
use crate::error::WidgetError;
use crate::{filter_list, polygon, ppoi};

type Binder = fn(&Element) -> Result<Vec<EventListener>, WidgetError>;

const WIDGETS: [(&str, &str, Binder); 3] = [
    ("polygon", POLYGON_ROOT, polygon::dom::bind),
    ("ppoi", PPOI_ROOT, ppoi::dom::bind),
    ("filter", FILTER_BLOCK, filter_list::dom::bind),
];

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if document().is_some_and(|doc| debug_requested(&doc)) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {err}");
    }

    init();
    Timeout::new(RESCAN_DELAY_MS, init).forget();
}

/// Bind every widget root on the page that is not bound yet.
#[wasm_bindgen]
pub fn init() {
    let Some(doc) = document() else {
        log::warn!("no document; widgets not bound");
        return;
    };
    let dropped = prune_detached();
    if dropped > 0 {
        log::debug!("released {dropped} detached widget(s)");
    }
    for (name, selector, binder) in WIDGETS {
        let bound = scan(&doc, name, selector, binder);
        if bound > 0 {
            log::info!("bound {bound} {name} widget(s)");
        }
    }
}

fn scan(doc: &Document, name: &str, selector: &str, binder: Binder) -> usize {
    let roots = match query_all(doc, selector) {
        Ok(roots) => roots,
        Err(err) => {
            log::warn!("{name} scan failed: {err}");
            return 0;
        }
    };
    let mut bound = 0;
    for root in roots.iter().filter(|root| !is_bound(root)) {
        match binder(root).and_then(|listeners| register(root, listeners)) {
            Ok(()) => bound += 1,
            Err(err) => log::warn!("{name} widget not bound: {err}"),
        }
    }
    bound
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn debug_requested(doc: &Document) -> bool {
    doc.document_element()
        .and_then(|html| html.get_attribute(LOG_LEVEL_ATTR))
        .is_some_and(|level| level.eq_ignore_ascii_case("debug"))
}
