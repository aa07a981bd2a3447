//! End-to-end exercises of the popup pipeline: publish a request into the
//! visibility slot, resolve the item against the stores, build the actions
//! model, and classify the presentation mode.

use std::cell::Cell;
use std::rc::Rc;

use armory_core::{
    Item, NON_INSTANCED_ID, Objective, PopupSlot, PresentationMode, Store, Tier,
    build_item_actions_model, classify, find_live_item,
};

fn item(id: &str, index: &str, tier: Tier) -> Item {
    Item {
        id: id.to_string(),
        index: index.to_string(),
        name: "Test Item".to_string(),
        item_type: "Weapon".to_string(),
        tier,
        locked: false,
        equipped: false,
        notransfer: false,
        max_stack_size: 1,
        objectives: Vec::new(),
    }
}

fn store(id: &str, items: Vec<Item>) -> Store {
    Store {
        id: id.to_string(),
        name: id.to_string(),
        is_vault: id == "vault",
        items,
    }
}

/// Run one render pass the way the container does: read the slot, resolve
/// the item, build the model, classify.
fn render_pass(
    slot: &PopupSlot<Item>,
    stores: &[Store],
    phone_portrait: bool,
) -> (Option<Item>, PresentationMode) {
    let request = slot.current();
    let resolved = request
        .as_ref()
        .map(|requested| find_live_item(requested, stores).clone());
    let model = resolved
        .as_ref()
        .and_then(|live| build_item_actions_model(live, stores));
    let mode = classify(
        request.is_some(),
        resolved.is_some(),
        model.is_some(),
        phone_portrait,
    );
    (resolved, mode)
}

#[test]
fn stale_request_resolves_to_store_copy_on_desktop() {
    let mut live = item("5", "5-live", Tier::Legendary);
    live.objectives.push(Objective {
        description: "Complete strikes".to_string(),
        progress: 7,
        completion_value: 10,
    });
    let stores = vec![store("hunter", vec![live]), store("vault", Vec::new())];

    let mut stale = item("5", "5-live", Tier::Legendary);
    stale.name = "Old Display Name".to_string();

    let slot = PopupSlot::new();
    slot.publish(stale);

    let (resolved, mode) = render_pass(&slot, &stores, false);
    let resolved = resolved.expect("request resolves");
    assert_eq!(resolved.objectives[0].progress, 7);
    assert_eq!(resolved.name, "Test Item");
    assert_eq!(mode, PresentationMode::DesktopPopover);
}

#[test]
fn non_instanced_request_shows_unchanged_on_phone() {
    let requested = item(NON_INSTANCED_ID, "0-glimmer", Tier::Common);
    let slot = PopupSlot::new();
    slot.publish(requested.clone());

    let (resolved, mode) = render_pass(&slot, &[store("vault", Vec::new())], true);
    assert_eq!(resolved, Some(requested));
    assert_eq!(mode, PresentationMode::MobileSheet);
}

#[test]
fn empty_slot_renders_hidden() {
    let slot: PopupSlot<Item> = PopupSlot::new();
    let stores = vec![store("hunter", vec![item("5", "5-a", Tier::Rare)])];
    let (resolved, mode) = render_pass(&slot, &stores, false);
    assert_eq!(resolved, None);
    assert_eq!(mode, PresentationMode::Hidden);
}

#[test]
fn affordance_free_item_renders_hidden() {
    let mut currency = item(NON_INSTANCED_ID, "0-shards", Tier::Currency);
    currency.notransfer = true;

    let slot = PopupSlot::new();
    slot.publish(currency);

    let (resolved, mode) = render_pass(&slot, &[], false);
    assert!(resolved.is_some());
    assert_eq!(mode, PresentationMode::Hidden);
}

#[test]
fn all_dismissal_triggers_converge_on_one_clear() {
    let slot = PopupSlot::new();
    let notified = Rc::new(Cell::new(0_u32));
    {
        let notified = Rc::clone(&notified);
        slot.subscribe(Rc::new(move || notified.set(notified.get() + 1)));
    }

    slot.publish(item("5", "5-a", Tier::Rare));
    assert_eq!(notified.get(), 1);

    // Escape, click-outside, and a route change all funnel into the same
    // clear effect; only the first one observes a held value.
    slot.clear();
    slot.clear();
    slot.clear();
    assert!(slot.is_empty());
    assert_eq!(notified.get(), 2);

    let (_, mode) = render_pass(&slot, &[], false);
    assert_eq!(mode, PresentationMode::Hidden);
}

#[test]
fn new_show_replaces_previous_request() {
    let slot = PopupSlot::new();
    slot.publish(item("5", "5-a", Tier::Rare));
    slot.publish(item("6", "6-a", Tier::Exotic));

    let stores = vec![store(
        "hunter",
        vec![item("5", "5-a", Tier::Rare), item("6", "6-a", Tier::Exotic)],
    )];
    let (resolved, mode) = render_pass(&slot, &stores, false);
    assert_eq!(resolved.expect("resolves").id, "6");
    assert_eq!(mode, PresentationMode::DesktopPopover);
}
