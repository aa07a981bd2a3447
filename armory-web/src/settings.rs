//! User preferences, persisted in `localStorage`.

use crate::dom;
use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "armory.settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Show the Details tab in the item popup.
    #[serde(default = "default_item_details")]
    pub item_details: bool,
}

fn default_item_details() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            item_details: default_item_details(),
        }
    }
}

/// Read settings from storage, falling back to defaults when storage is
/// unavailable or holds something unreadable.
#[must_use]
pub fn load_settings() -> Settings {
    let Ok(storage) = dom::local_storage() else {
        return Settings::default();
    };
    let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) else {
        return Settings::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("Discarding unreadable settings: {err}");
        Settings::default()
    })
}

/// Persist settings. Failure is logged and otherwise ignored; preferences
/// simply will not survive the session.
pub fn save_settings(settings: &Settings) {
    let Ok(storage) = dom::local_storage() else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(SETTINGS_KEY, &raw).is_err() {
                log::error!("Failed to persist settings");
            }
        }
        Err(err) => log::error!("Failed to serialize settings: {err}"),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = Settings {
            item_details: false,
        };
        let raw = serde_json::to_string(&settings).expect("serializes");
        let parsed: Settings = serde_json::from_str(&raw).expect("parses");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Settings = serde_json::from_str("{}").expect("parses");
        assert!(parsed.item_details);
    }
}
