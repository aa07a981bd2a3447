//! Derives which action affordances the popup may offer for an item.

use crate::item::{Item, Tier};
use crate::store::Store;
use std::hash::{Hash, Hasher};

/// A store the displayed item can be moved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTarget {
    pub store_id: String,
    pub store_name: String,
    pub is_vault: bool,
}

/// The affordance set for one displayed item. Built once per
/// (item, store set) pair and handed to every action control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemActionsModel {
    /// Stores the item can be moved to, in store order.
    pub move_targets: Vec<MoveTarget>,
    pub can_lock: bool,
    pub can_tag: bool,
}

impl ItemActionsModel {
    #[must_use]
    pub fn has_move_controls(&self) -> bool {
        !self.move_targets.is_empty()
    }

    #[must_use]
    pub const fn has_accessory_controls(&self) -> bool {
        self.can_lock || self.can_tag
    }

    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.has_move_controls() || self.has_accessory_controls()
    }
}

/// Build the actions model for `item` against the current stores.
///
/// Returns `None` when the item supports no affordances at all, in which
/// case the popup renders nothing rather than an empty shell.
#[must_use]
pub fn build_item_actions_model(item: &Item, stores: &[Store]) -> Option<ItemActionsModel> {
    let owner = stores
        .iter()
        .find(|store| store.items.iter().any(|held| held.index == item.index))
        .map(|store| store.id.as_str());

    let move_targets = if item.notransfer {
        Vec::new()
    } else {
        stores
            .iter()
            .filter(|store| Some(store.id.as_str()) != owner)
            .map(|store| MoveTarget {
                store_id: store.id.clone(),
                store_name: store.name.clone(),
                is_vault: store.is_vault,
            })
            .collect()
    };

    let can_lock = item.is_instanced();
    let can_tag = item.is_instanced() && item.tier != Tier::Currency;

    let model = ItemActionsModel {
        move_targets,
        can_lock,
        can_tag,
    };
    model.has_controls().then_some(model)
}

/// Explicit memoization key for the actions model: the displayed item's
/// render identity plus a fingerprint of the store set. Recompute only when
/// this key changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsKey {
    item_index: String,
    stores_fingerprint: u64,
}

impl ActionsKey {
    #[must_use]
    pub fn new(item: &Item, stores: &[Store]) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for store in stores {
            store.id.hash(&mut hasher);
            // Membership matters, not just counts: a swap that moves items
            // between stores while keeping every count the same still
            // changes which store owns the displayed item.
            for held in &store.items {
                held.index.hash(&mut hasher);
            }
        }
        Self {
            item_index: item.index.clone(),
            stores_fingerprint: hasher.finish(),
        }
    }
}
