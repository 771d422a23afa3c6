//! Theme State
//!
//! Dark mode flag shared by the shell. Passed explicitly as a prop to the
//! components that read or toggle it.

use leptos::prelude::*;

use crate::config::{DARK_CLASS, DARK_MODE_KEY};
use crate::dom;
use crate::storage::{self, KeyValueStore};

#[derive(Clone, Copy)]
pub struct Theme {
    dark_mode: RwSignal<bool>,
}

impl Theme {
    /// Initial value from storage, light if absent
    pub fn load(storage: &impl KeyValueStore) -> Self {
        Self {
            dark_mode: RwSignal::new(storage::read(storage, DARK_MODE_KEY, false)),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode.get()
    }

    /// Flip the flag and persist it
    pub fn toggle(&self, storage: &impl KeyValueStore) {
        let dark = !self.dark_mode.get_untracked();
        self.dark_mode.set(dark);
        storage::write(storage, DARK_MODE_KEY, &dark);
        log::debug!("dark mode {}", if dark { "on" } else { "off" });
    }

    /// Mirror the current value onto the `<html>` class list
    pub fn apply_to_document(dark: bool) {
        if let Err(e) = dom::set_root_class(DARK_CLASS, dark) {
            log::warn!("could not update root class: {}", e);
        }
    }
}
