use crate::dom;
use crate::hotkeys::is_text_entry_tag;
use crate::item_actions::{ItemTag, tag_for_key};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_tag: Callback<ItemTag>,
}

/// Renders nothing; binds the organizer-tag keys for as long as it is
/// mounted, which the container limits to the popover being open for a
/// taggable item.
#[function_component(ItemTagHotkeys)]
pub fn item_tag_hotkeys(props: &Props) -> Html {
    use_effect_with(props.on_tag.clone(), |on_tag| {
        let on_tag = on_tag.clone();
        let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.repeat() {
                return;
            }
            let typing = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|element| is_text_entry_tag(&element.tag_name()));
            if typing {
                return;
            }
            if let Some(tag) = tag_for_key(&event.key()) {
                event.prevent_default();
                on_tag.emit(tag);
            }
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

    Html::default()
}
