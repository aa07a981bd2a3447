use crate::app::state::AppState;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: AppState,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &Props) -> Html {
    let onchange = {
        let state = props.state.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let mut settings = (*state.settings).clone();
            settings.item_details = input.checked();
            state.update_settings(settings);
        })
    };

    html! {
        <main class="settings">
            <h1>{"Settings"}</h1>
            <label class="settings__row">
                <input
                    type="checkbox"
                    checked={props.state.settings.item_details}
                    {onchange}
                />
                {"Show the Details tab in item popups"}
            </label>
        </main>
    }
}
