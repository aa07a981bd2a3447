use super::{ItemAccessoryButtons, ItemMoveLocations, ItemTag};
use armory_core::{Item, ItemActionsModel, MoveTarget};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub actions_model: ItemActionsModel,
    pub on_tag: Callback<ItemTag>,
    pub on_toggle_lock: Callback<()>,
    pub on_move: Callback<MoveTarget>,
}

/// The action column shown beside the desktop popover body.
#[function_component(DesktopItemActions)]
pub fn desktop_item_actions(props: &Props) -> Html {
    html! {
        <div class="desktop-actions__column">
            <ItemAccessoryButtons
                item={props.item.clone()}
                actions_model={props.actions_model.clone()}
                show_label={true}
                on_tag={props.on_tag.clone()}
                on_toggle_lock={props.on_toggle_lock.clone()}
            />
            <ItemMoveLocations
                item={props.item.clone()}
                actions_model={props.actions_model.clone()}
                on_move={props.on_move.clone()}
            />
        </div>
    }
}
