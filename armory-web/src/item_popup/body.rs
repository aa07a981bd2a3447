use armory_core::Item;
use yew::prelude::*;

/// Tabs of the popup body. Selection lives in the container so it survives
/// retargeting to another item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPopupTab {
    #[default]
    Overview,
    Details,
}

impl ItemPopupTab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Details => "Details",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub tab: ItemPopupTab,
    pub on_tab_changed: Callback<ItemPopupTab>,
    #[prop_or_default]
    pub extra_info: Option<AttrValue>,
    /// From the item-details setting; hides the Details tab when off.
    #[prop_or_default]
    pub show_details: bool,
}

#[function_component(ItemPopupBody)]
pub fn item_popup_body(props: &Props) -> Html {
    let mut tabs = vec![ItemPopupTab::Overview];
    if props.show_details {
        tabs.push(ItemPopupTab::Details);
    }
    // A stale Details selection falls back to Overview when the setting is
    // off.
    let active = if tabs.contains(&props.tab) {
        props.tab
    } else {
        ItemPopupTab::Overview
    };

    let content = match active {
        ItemPopupTab::Overview => overview(&props.item, props.extra_info.as_ref()),
        ItemPopupTab::Details => details(&props.item),
    };

    html! {
        <div class="item-popup-body">
            if tabs.len() > 1 {
                <div class="item-popup-body__tabs" role="tablist">
                    { for tabs.iter().map(|tab| {
                        let tab = *tab;
                        let on_tab_changed = props.on_tab_changed.clone();
                        let selected = tab == active;
                        let class = classes!("item-popup-body__tab", selected.then_some("active"));
                        html! {
                            <button
                                type="button"
                                {class}
                                role="tab"
                                aria-selected={selected.to_string()}
                                onclick={Callback::from(move |_: MouseEvent| on_tab_changed.emit(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    })}
                </div>
            }
            <div class="item-popup-body__content" role="tabpanel">
                { content }
            </div>
        </div>
    }
}

fn overview(item: &Item, extra_info: Option<&AttrValue>) -> Html {
    html! {
        <>
            if let Some(extra) = extra_info {
                <p class="item-popup-body__extra">{ extra.clone() }</p>
            }
            if item.objectives.is_empty() {
                <p class="item-popup-body__type-line">{ &item.item_type }</p>
            } else {
                <ul class="item-popup-body__objectives">
                    { for item.objectives.iter().map(|objective| {
                        let class = classes!(
                            "objective",
                            objective.complete().then_some("objective--complete")
                        );
                        html! {
                            <li {class}>
                                <span class="objective__description">{ &objective.description }</span>
                                <span class="objective__progress">
                                    { format!("{}/{}", objective.progress, objective.completion_value) }
                                </span>
                            </li>
                        }
                    })}
                </ul>
            }
        </>
    }
}

fn details(item: &Item) -> Html {
    html! {
        <dl class="item-popup-body__details">
            <dt>{"Type"}</dt>
            <dd>{ &item.item_type }</dd>
            <dt>{"Tier"}</dt>
            <dd>{ format!("{:?}", item.tier) }</dd>
            if item.max_stack_size > 1 {
                <dt>{"Max stack"}</dt>
                <dd>{ item.max_stack_size }</dd>
            }
            if item.notransfer {
                <dt>{"Transfer"}</dt>
                <dd>{"Cannot be transferred"}</dd>
            }
        </dl>
    }
}
