//! Browser-side checks of the popup stream effects.

#![cfg(target_arch = "wasm32")]

use armory_core::{Item, Tier};
use armory_web::item_popup::{current_item_popup, hide_item_popup, show_item_popup};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        index: format!("{id}-0"),
        name: "Wasm Test Item".to_string(),
        item_type: "Weapon".to_string(),
        tier: Tier::Legendary,
        locked: false,
        equipped: false,
        notransfer: false,
        max_stack_size: 1,
        objectives: Vec::new(),
    }
}

#[wasm_bindgen_test]
fn show_then_hide_round_trip() {
    assert!(current_item_popup().is_none());

    let document = web_sys::window().unwrap().document().unwrap();
    let anchor = document.create_element("div").unwrap();
    show_item_popup(item("11"), Some(anchor), None);
    assert_eq!(current_item_popup().unwrap().item.id, "11");

    // Last write wins.
    show_item_popup(item("12"), None, None);
    assert_eq!(current_item_popup().unwrap().item.id, "12");

    hide_item_popup();
    hide_item_popup();
    assert!(current_item_popup().is_none());
}
