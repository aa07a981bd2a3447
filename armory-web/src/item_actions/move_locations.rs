use armory_core::{Item, ItemActionsModel, MoveTarget};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub actions_model: ItemActionsModel,
    pub on_move: Callback<MoveTarget>,
}

/// One move button per eligible destination store, in store order.
#[function_component(ItemMoveLocations)]
pub fn item_move_locations(props: &Props) -> Html {
    if !props.actions_model.has_move_controls() {
        return Html::default();
    }

    html! {
        <div class="move-locations" role="group" aria-label="Move item">
            { for props.actions_model.move_targets.iter().map(|target| {
                let target = target.clone();
                let on_move = props.on_move.clone();
                let label = if target.is_vault {
                    format!("Vault: {}", target.store_name)
                } else {
                    format!("Store on {}", target.store_name)
                };
                let class = classes!(
                    "move-locations__target",
                    target.is_vault.then_some("move-locations__target--vault")
                );
                html! {
                    <button
                        type="button"
                        {class}
                        onclick={Callback::from(move |_: MouseEvent| on_move.emit(target.clone()))}
                    >
                        { label }
                    </button>
                }
            })}
        </div>
    }
}
