//! Device classification for the responsive popup split.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

/// The breakpoint below which the popup renders as a sheet instead of an
/// anchored popover.
pub const PHONE_PORTRAIT_QUERY: &str = "(max-width: 540px) and (orientation: portrait)";

fn phone_portrait_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media(PHONE_PORTRAIT_QUERY)
        .ok()
        .flatten()
}

/// Track whether the viewport currently matches the phone-portrait media
/// query. Re-renders the caller when the match flips; the listener lives for
/// the component's mounted lifetime.
#[hook]
pub fn use_phone_portrait() -> bool {
    let matches = use_state(|| phone_portrait_query().is_some_and(|q| q.matches()));

    {
        let matches = matches.clone();
        use_effect_with((), move |_| {
            let query = phone_portrait_query();
            let listener = Closure::<dyn Fn(MediaQueryListEvent)>::new(
                move |event: MediaQueryListEvent| {
                    matches.set(event.matches());
                },
            );
            if let Some(query) = &query {
                let _ = query.add_event_listener_with_callback(
                    "change",
                    listener.as_ref().unchecked_ref(),
                );
            }
            move || {
                if let Some(query) = &query {
                    let _ = query.remove_event_listener_with_callback(
                        "change",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    *matches
}
