//! The global "currently shown item" stream.
//!
//! One process-wide [`PopupSlot`] holds the live [`PopupRequest`], created
//! with the wasm thread and torn down with it. Anything in the app may call
//! [`show_item_popup`] or [`hide_item_popup`]; the popup container is the
//! only subscriber.

use armory_core::{Item, PopupSlot};
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

/// A request to show the popup for one item, anchored at the element that
/// triggered it. At most one request is live at a time; publishing replaces
/// the previous one.
#[derive(Clone, PartialEq)]
pub struct PopupRequest {
    pub item: Item,
    /// Trigger element the desktop popover anchors to. The mobile sheet
    /// ignores it.
    pub anchor: Option<Element>,
    /// Extra context line rendered under the item, e.g. where a search hit
    /// came from.
    pub extra_info: Option<AttrValue>,
}

thread_local! {
    static ITEM_POPUP: PopupSlot<PopupRequest> = PopupSlot::new();
}

/// Show the popup for `item`. Replaces any popup currently shown.
pub fn show_item_popup(item: Item, anchor: Option<Element>, extra_info: Option<AttrValue>) {
    ITEM_POPUP.with(|slot| {
        slot.publish(PopupRequest {
            item,
            anchor,
            extra_info,
        });
    });
}

/// Dismiss the popup. Safe to call when nothing is shown.
pub fn hide_item_popup() {
    ITEM_POPUP.with(|slot| slot.clear());
}

/// Snapshot of the live request, for logic outside the render tree.
#[must_use]
pub fn current_item_popup() -> Option<PopupRequest> {
    ITEM_POPUP.with(|slot| slot.current())
}

/// Subscribe the calling component to the popup stream. Returns the current
/// request and re-renders the caller whenever it changes.
#[hook]
pub fn use_item_popup() -> Option<PopupRequest> {
    let update = use_force_update();

    use_effect_with((), move |_| {
        let id = ITEM_POPUP.with(|slot| {
            slot.subscribe(Rc::new(move || {
                update.force_update();
            }))
        });
        move || ITEM_POPUP.with(|slot| slot.unsubscribe(id))
    });

    ITEM_POPUP.with(|slot| slot.current())
}
