use crate::item_popup::show_item_popup;
use armory_core::{Item, Store};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stores: Vec<Store>,
}

/// The main screen: one column per store, one tile per item. Clicking a tile
/// publishes a popup request anchored at the tile.
#[function_component(InventoryPage)]
pub fn inventory_page(props: &Props) -> Html {
    html! {
        <main id="inventory-root" class="inventory">
            { for props.stores.iter().map(store_column) }
        </main>
    }
}

fn store_column(store: &Store) -> Html {
    let class = classes!("store-column", store.is_vault.then_some("store-column--vault"));
    html! {
        <section key={store.id.clone()} {class}>
            <h2 class="store-column__name">{ &store.name }</h2>
            <div class="store-column__items">
                { for store.items.iter().map(item_tile) }
            </div>
        </section>
    }
}

fn item_tile(item: &Item) -> Html {
    let onclick = {
        let item = item.clone();
        Callback::from(move |event: MouseEvent| {
            let anchor = event
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
            show_item_popup(item.clone(), anchor, None);
        })
    };
    html! {
        <button
            type="button"
            key={item.index.clone()}
            class={classes!("item-tile", item.tier.css_class())}
            title={item.name.clone()}
            {onclick}
        >
            <span class="item-tile__name">{ &item.name }</span>
            if item.equipped {
                <span class="item-tile__equipped" aria-hidden="true">{"\u{25C6}"}</span>
            }
        </button>
    }
}
