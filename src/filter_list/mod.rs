//! Collapsible filter blocks on admin changelist pages.
//!
//! Which blocks are collapsed is remembered across page loads in local
//! storage as a JSON array of filter ids.


#[cfg(feature = "hydrate")]
pub mod dom;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of collapsed filter ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollapseState {
    collapsed: BTreeSet<String>,
}

impl CollapseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the stored JSON. Malformed input gives the empty state.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("discarding stored filter state: {err}");
            Self::default()
        })
    }

    /// Serialize as a sorted JSON array.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error; a set of strings never produces one in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed.contains(id)
    }

    /// Flip one filter and return its new collapsed flag.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.collapsed.remove(id) {
            false
        } else {
            self.collapsed.insert(id.to_owned());
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}
