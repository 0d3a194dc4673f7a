//! Browser localStorage helpers.
//!
//! Hydrate builds talk to `window.localStorage`; native builds have no
//! storage and every call is a no-op, so callers need no cfg of their own.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read the raw string stored under `key`.
#[must_use]
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("no storage; {key} unread");
        None
    }
}

/// Store `value` under `key`. Returns whether the write happened.
pub fn save(key: &str, value: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return false;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("no storage; {key}={value} dropped");
        false
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}
