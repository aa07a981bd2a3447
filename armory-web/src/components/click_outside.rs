use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::PointerEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_click_outside: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children and fires `on_click_outside` for any pointer press
/// landing outside the wrapped subtree. The document listener lives for the
/// component's mounted lifetime.
#[function_component(ClickOutside)]
pub fn click_outside(props: &Props) -> Html {
    let wrapper_ref = use_node_ref();

    {
        let wrapper_ref = wrapper_ref.clone();
        use_effect_with(props.on_click_outside.clone(), move |on_click_outside| {
            let on_click_outside = on_click_outside.clone();
            let listener = Closure::<dyn Fn(PointerEvent)>::new(move |event: PointerEvent| {
                let Some(wrapper) = wrapper_ref.cast::<web_sys::Node>() else {
                    return;
                };
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                if !wrapper.contains(target.as_ref()) {
                    on_click_outside.emit(());
                }
            });
            let document = dom::document();
            let _ = document
                .add_event_listener_with_callback("pointerdown", listener.as_ref().unchecked_ref());
            move || {
                let _ = document.remove_event_listener_with_callback(
                    "pointerdown",
                    listener.as_ref().unchecked_ref(),
                );
                drop(listener);
            }
        });
    }

    html! {
        <div ref={wrapper_ref} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}
