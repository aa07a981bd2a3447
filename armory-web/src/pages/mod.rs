pub mod inventory;
pub mod settings;

pub use inventory::InventoryPage;
pub use settings::SettingsPage;

use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"Nothing is stored here."}</p>
        </main>
    }
}
