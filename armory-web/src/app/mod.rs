use crate::item_popup::ItemPopupContainer;
use crate::pages::{InventoryPage, NotFoundPage, SettingsPage};
use crate::router::Route;
use crate::viewport::use_phone_portrait;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let is_phone_portrait = use_phone_portrait();

    let switch = {
        let app_state = app_state.clone();
        move |route: Route| match route {
            Route::Inventory => html! {
                <InventoryPage stores={(*app_state.stores).clone()} />
            },
            Route::Settings => html! {
                <SettingsPage state={app_state.clone()} />
            },
            Route::NotFound => html! { <NotFoundPage /> },
        }
    };

    html! {
        <>
            <Switch<Route> render={switch} />
            <ItemPopupContainer
                stores={(*app_state.stores).clone()}
                {is_phone_portrait}
                item_details={app_state.settings.item_details}
                boundary_selector={Some(AttrValue::from("#inventory-root"))}
            />
        </>
    }
}
