use armory_core::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
}

#[function_component(ItemPopupHeader)]
pub fn item_popup_header(props: &Props) -> Html {
    let item = &props.item;
    let class = classes!("item-popup-header", item.tier.css_class());
    html! {
        <div {class}>
            <h2 class="item-popup-header__name">{ &item.name }</h2>
            <div class="item-popup-header__subtitle">
                <span class="item-popup-header__type">{ &item.item_type }</span>
                if item.locked {
                    <span class="item-popup-header__lock" title="Locked">{"\u{1F512}"}</span>
                }
                if item.equipped {
                    <span class="item-popup-header__equipped">{"Equipped"}</span>
                }
            </div>
        </div>
    }
}
