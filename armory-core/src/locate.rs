//! Reconciles a possibly-stale item reference against the live stores.
//!
//! Items mutate in place when the inventory refreshes (objective progress on
//! pursuits is the common case), so a reference captured when the popup was
//! opened may lag behind the copy the stores now hold.

use crate::item::Item;
use crate::store::Store;

/// Find the freshest known instance of `item` across `stores`.
///
/// Non-instanced items (id `"0"`) are returned unchanged: they carry no
/// identity to track. Otherwise stores are scanned in order and the first
/// item with a matching id wins. When nothing matches, the stale reference
/// is returned as-is; absence degrades to "use what we have" rather than an
/// error.
#[must_use]
pub fn find_live_item<'a>(item: &'a Item, stores: &'a [Store]) -> &'a Item {
    if !item.is_instanced() {
        return item;
    }

    for store in stores {
        for store_item in &store.items {
            if store_item.id == item.id {
                return store_item;
            }
        }
    }

    item
}
