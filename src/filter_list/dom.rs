//! Browser binding for collapsible filter blocks.
//!
//! All blocks on a page share one [`CollapseState`], loaded from local
//! storage on first use and written back after every toggle. When storage
//! is unavailable the state still lives in memory until the page unloads.

use std::cell::RefCell;

use gloo_events::EventListener;
use web_sys::Element;

use crate::consts::{COLLAPSED_CLASS, FILTER_ID_ATTR, FILTER_STORAGE_KEY, FILTER_TOGGLE};
use crate::dom::{find, set_class};
use crate::error::WidgetError;
use crate::filter_list::CollapseState;
use crate::storage;

thread_local! {
    static STATE: RefCell<Option<CollapseState>> = const { RefCell::new(None) };
}

fn with_state<R>(f: impl FnOnce(&mut CollapseState) -> R) -> R {
    STATE.with_borrow_mut(|slot| {
        let state = slot.get_or_insert_with(|| {
            storage::load(FILTER_STORAGE_KEY).map_or_else(CollapseState::new, |raw| CollapseState::from_json(&raw))
        });
        f(state)
    })
}

fn persist(state: &CollapseState) {
    match state.to_json() {
        Ok(raw) => {
            if !storage::save(FILTER_STORAGE_KEY, &raw) {
                log::debug!("filter state kept in memory only");
            }
        }
        Err(err) => log::warn!("filter state not saved: {err}"),
    }
}

/// Bind one filter block and return its listener.
///
/// # Errors
///
/// Returns an error when the block has no id attribute or no toggle.
pub fn bind(block: &Element) -> Result<Vec<EventListener>, WidgetError> {
    let id = block
        .get_attribute(FILTER_ID_ATTR)
        .ok_or(WidgetError::MissingAttribute(FILTER_ID_ATTR))?;
    let toggle: Element = find(block, FILTER_TOGGLE)?;

    set_class(block, COLLAPSED_CLASS, with_state(|state| state.is_collapsed(&id)));

    let block = block.clone();
    let listener = EventListener::new(&toggle, "click", move |_| {
        let collapsed = with_state(|state| {
            let collapsed = state.toggle(&id);
            persist(state);
            collapsed
        });
        log::debug!("filter {id} collapsed={collapsed}");
        set_class(&block, COLLAPSED_CLASS, collapsed);
    });
    Ok(vec![listener])
}
