//! Armory Core
//!
//! Platform-agnostic inventory and item-popup logic for the Armory web app.
//! This crate provides the data model, the live-item reconciliation pass,
//! the popup visibility slot, and the presentation state machine without any
//! UI or platform-specific dependencies.

pub mod actions;
pub mod item;
pub mod locate;
pub mod popup;
pub mod presentation;
pub mod store;

// Re-export commonly used types
pub use actions::{ActionsKey, ItemActionsModel, MoveTarget, build_item_actions_model};
pub use item::{Item, NON_INSTANCED_ID, Objective, Tier};
pub use locate::find_live_item;
pub use popup::{PopupSlot, SubscriptionId};
pub use presentation::{PresentationMode, classify};
pub use store::{InventoryData, InventoryError, Store};
