use super::ItemTag;
use armory_core::{Item, ItemActionsModel};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub actions_model: ItemActionsModel,
    #[prop_or_default]
    pub mobile: bool,
    #[prop_or_default]
    pub show_label: bool,
    pub on_tag: Callback<ItemTag>,
    pub on_toggle_lock: Callback<()>,
}

/// Quick-action row: lock toggle and organizer tags, gated by the actions
/// model.
#[function_component(ItemAccessoryButtons)]
pub fn item_accessory_buttons(props: &Props) -> Html {
    let model = &props.actions_model;
    if !model.has_accessory_controls() {
        return Html::default();
    }

    let class = classes!(
        "accessory-buttons",
        props.mobile.then_some("accessory-buttons--mobile")
    );

    let lock_button = model.can_lock.then(|| {
        let on_toggle_lock = props.on_toggle_lock.clone();
        let label = if props.item.locked { "Unlock" } else { "Lock" };
        let glyph = if props.item.locked { "\u{1F512}" } else { "\u{1F513}" };
        let text = if props.show_label { label } else { glyph };
        html! {
            <button
                type="button"
                class="accessory-buttons__lock"
                title={label}
                onclick={Callback::from(move |_: MouseEvent| on_toggle_lock.emit(()))}
            >
                { text }
            </button>
        }
    });

    let tag_buttons = model.can_tag.then(|| {
        html! {
            <>
                { for ItemTag::ALL.iter().map(|tag| {
                    let tag = *tag;
                    let on_tag = props.on_tag.clone();
                    let text = if props.show_label { tag.label() } else { tag.hotkey() };
                    html! {
                        <button
                            type="button"
                            class="accessory-buttons__tag"
                            title={format!("{} [{}]", tag.label(), tag.hotkey())}
                            onclick={Callback::from(move |_: MouseEvent| on_tag.emit(tag))}
                        >
                            { text }
                        </button>
                    }
                })}
            </>
        }
    });

    html! {
        <div {class}>
            { lock_button.unwrap_or_default() }
            { tag_buttons.unwrap_or_default() }
        </div>
    }
}
