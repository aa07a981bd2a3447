use crate::data;
use crate::settings::{Settings, load_settings, save_settings};
use armory_core::Store;
use yew::prelude::*;

/// Shared application state, one bundle of handles threaded through the
/// view tree.
#[derive(Clone, PartialEq)]
pub struct AppState {
    /// Sorted inventory containers: characters first, vault last. The popup
    /// core only reads them.
    pub stores: UseStateHandle<Vec<Store>>,
    pub settings: UseStateHandle<Settings>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        stores: use_state(data::demo_stores),
        settings: use_state(load_settings),
    }
}

impl AppState {
    /// Apply and persist a settings change.
    pub fn update_settings(&self, settings: Settings) {
        save_settings(&settings);
        self.settings.set(settings);
    }
}
