//! Built-in demo inventory so the app renders standalone, without a remote
//! account connection.

use armory_core::{InventoryData, Store};
use once_cell::sync::Lazy;

static DEMO_INVENTORY: Lazy<Vec<Store>> = Lazy::new(|| {
    match InventoryData::from_json(include_str!("data/demo_inventory.json")) {
        Ok(data) => data.stores,
        Err(err) => {
            log::error!("Failed to load demo inventory: {err}");
            Vec::new()
        }
    }
});

/// Snapshot of the demo stores, sorted with characters before the vault.
#[must_use]
pub fn demo_stores() -> Vec<Store> {
    DEMO_INVENTORY.clone()
}
