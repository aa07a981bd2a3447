//! Document-level hotkey bindings scoped to a component's mounted lifetime.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Whether `key` (from `KeyboardEvent::key`) satisfies `binding`.
/// Case-insensitive; `"esc"` is accepted as shorthand for Escape.
#[must_use]
pub fn key_matches(binding: &str, key: &str) -> bool {
    if binding.eq_ignore_ascii_case("esc") {
        return key.eq_ignore_ascii_case("Escape");
    }
    binding.eq_ignore_ascii_case(key)
}

/// Single-character bindings must stay inert while the user is typing.
#[must_use]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

fn event_targets_text_entry(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| is_text_entry_tag(&element.tag_name()))
}

/// Bind `binding` to `on_press` on the document for as long as the calling
/// component stays mounted. Single-character bindings are suppressed while a
/// text field has focus; named keys (Escape, arrows) fire regardless.
#[hook]
pub fn use_hotkey(binding: &'static str, on_press: Callback<()>) {
    use_effect_with((binding, on_press), |(binding, on_press)| {
        let binding = *binding;
        let on_press = on_press.clone();
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.repeat() || !key_matches(binding, &event.key()) {
                return;
            }
            if binding.chars().count() == 1 && event_targets_text_entry(&event) {
                return;
            }
            event.prevent_default();
            on_press.emit(());
        });
        let document = dom::document();
        let _ = document
            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        move || {
            let _ = document
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
            drop(listener);
        }
    });
}
