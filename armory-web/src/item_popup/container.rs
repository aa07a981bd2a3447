use crate::components::{ClickOutside, Sheet};
use crate::hotkeys::use_hotkey;
use crate::item_actions::{DesktopItemActions, ItemAccessoryButtons, ItemMoveLocations, ItemTag};
use crate::item_popup::body::{ItemPopupBody, ItemPopupTab};
use crate::item_popup::header::ItemPopupHeader;
use crate::item_popup::stream::{hide_item_popup, use_item_popup};
use crate::item_popup::tag_hotkeys::ItemTagHotkeys;
use crate::popper::use_popper;
use armory_core::{
    ActionsKey, Item, ItemActionsModel, MoveTarget, PresentationMode, Store,
    build_item_actions_model, classify, find_live_item,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stores: Vec<Store>,
    pub is_phone_portrait: bool,
    #[prop_or_default]
    pub item_details: bool,
    /// CSS selector for the element the desktop popover is kept within.
    #[prop_or_default]
    pub boundary_selector: Option<AttrValue>,
}

/// A container that can show a single item popup. The app mounts exactly one
/// of these, which is what keeps multiple popups from showing at once.
///
/// The container subscribes to the popup stream, re-resolves the requested
/// item against the live stores, derives the actions model, and picks a
/// presentation arm: a full-width sheet on phone portrait, an anchored
/// popover otherwise, nothing when any input is missing. Escape, a click
/// outside the popover, and any route change all dismiss it through the same
/// clear effect.
#[function_component(ItemPopupContainer)]
pub fn item_popup_container(props: &Props) -> Html {
    let tab = use_state(|| ItemPopupTab::Overview);
    let request = use_item_popup();

    let on_close: Callback<()> = use_callback((), |(), _| hide_item_popup());

    // Stale anchors don't survive navigation; any route change dismisses.
    let location = use_location();
    let pathname = location.map(|loc| loc.path().to_string());
    use_effect_with(pathname, |_| {
        hide_item_popup();
        || {}
    });

    use_hotkey("esc", on_close.clone());

    // The request may carry an old snapshot of the item; prefer the copy the
    // stores hold now.
    let resolved: Option<Item> = request
        .as_ref()
        .map(|req| find_live_item(&req.item, &props.stores).clone());

    let actions_key = resolved
        .as_ref()
        .map(|item| ActionsKey::new(item, &props.stores));
    let actions_model = {
        let resolved = resolved.clone();
        let stores = props.stores.clone();
        use_memo(actions_key, move |_| {
            resolved
                .as_ref()
                .and_then(|item| build_item_actions_model(item, &stores))
        })
    };

    let popup_ref = use_node_ref();
    let anchor = request.as_ref().and_then(|req| req.anchor.clone());
    use_popper(popup_ref.clone(), anchor, props.boundary_selector.clone());

    let mode = classify(
        request.is_some(),
        resolved.is_some(),
        actions_model.is_some(),
        props.is_phone_portrait,
    );

    let (Some(request), Some(item), Some(model)) =
        (request, resolved, (*actions_model).clone())
    else {
        return Html::default();
    };

    let on_tab_changed = {
        let tab = tab.clone();
        Callback::from(move |new_tab: ItemPopupTab| {
            if new_tab != *tab {
                tab.set(new_tab);
            }
        })
    };

    let on_tag = {
        let name = item.name.clone();
        Callback::from(move |tag: ItemTag| {
            log::info!("Tagging {name} as {}", tag.label());
        })
    };
    let on_toggle_lock = {
        let name = item.name.clone();
        let locked = item.locked;
        Callback::from(move |()| {
            let verb = if locked { "Unlocking" } else { "Locking" };
            log::info!("{verb} {name}");
        })
    };
    let on_move = {
        let name = item.name.clone();
        Callback::from(move |target: MoveTarget| {
            log::info!("Moving {name} to {}", target.store_name);
            // Completed actions dismiss the popup like any other trigger.
            hide_item_popup();
        })
    };

    let body = html! {
        <ItemPopupBody
            key={format!("body-{}", item.index)}
            item={item.clone()}
            tab={*tab}
            on_tab_changed={on_tab_changed}
            extra_info={request.extra_info.clone()}
            show_details={props.item_details}
        />
    };

    match mode {
        PresentationMode::Hidden => Html::default(),
        PresentationMode::MobileSheet => render_sheet(
            &item,
            &model,
            body,
            &on_close,
            &on_tag,
            &on_toggle_lock,
            &on_move,
        ),
        PresentationMode::DesktopPopover => render_popover(
            &item,
            &model,
            body,
            &popup_ref,
            &on_close,
            &on_tag,
            &on_toggle_lock,
            &on_move,
        ),
    }
}

fn render_sheet(
    item: &Item,
    model: &ItemActionsModel,
    body: Html,
    on_close: &Callback<()>,
    on_tag: &Callback<ItemTag>,
    on_toggle_lock: &Callback<()>,
    on_move: &Callback<MoveTarget>,
) -> Html {
    let footer = if model.has_move_controls() {
        html! {
            <div class="mobile-move-locations">
                <ItemMoveLocations
                    item={item.clone()}
                    actions_model={model.clone()}
                    on_move={on_move.clone()}
                />
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <Sheet
            on_close={on_close.clone()}
            header={html! {
                <ItemPopupHeader key={format!("header-{}", item.index)} item={item.clone()} />
            }}
            sheet_class={classes!("item-popup", item.tier.css_class(), "move-popup-dialog")}
            {footer}
        >
            if model.has_accessory_controls() {
                <div class="mobile-item-actions">
                    <ItemAccessoryButtons
                        item={item.clone()}
                        actions_model={model.clone()}
                        mobile={true}
                        show_label={false}
                        on_tag={on_tag.clone()}
                        on_toggle_lock={on_toggle_lock.clone()}
                    />
                </div>
            }
            <div class="popup-background">{ body }</div>
        </Sheet>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_popover(
    item: &Item,
    model: &ItemActionsModel,
    body: Html,
    popup_ref: &NodeRef,
    on_close: &Callback<()>,
    on_tag: &Callback<ItemTag>,
    on_toggle_lock: &Callback<()>,
    on_move: &Callback<MoveTarget>,
) -> Html {
    let tier_class = item.tier.css_class();
    html! {
        <div
            class={classes!("item-popup", "move-popup-dialog", tier_class, "desktop-popup-root")}
            ref={popup_ref.clone()}
            role="dialog"
            aria-modal="false"
        >
            <ClickOutside on_click_outside={on_close.clone()}>
                if model.can_tag {
                    <ItemTagHotkeys on_tag={on_tag.clone()} />
                }
                <div class="desktop-popup">
                    <div class="desktop-popup-body popup-background">
                        <ItemPopupHeader
                            key={format!("header-{}", item.index)}
                            item={item.clone()}
                        />
                        { body }
                    </div>
                    if model.has_controls() {
                        <div class="desktop-actions">
                            <DesktopItemActions
                                item={item.clone()}
                                actions_model={model.clone()}
                                on_tag={on_tag.clone()}
                                on_toggle_lock={on_toggle_lock.clone()}
                                on_move={on_move.clone()}
                            />
                        </div>
                    }
                </div>
            </ClickOutside>
            <div class={classes!("arrow", tier_class)} aria-hidden="true" />
        </div>
    }
}
