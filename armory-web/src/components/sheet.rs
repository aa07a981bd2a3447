use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub header: Html,
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub sheet_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-width slide-up panel for phone-portrait layouts. Owns its dismissal
/// gesture: backdrop press or the close button, both routed through
/// `on_close`.
#[function_component(Sheet)]
pub fn sheet(props: &Props) -> Html {
    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_close_button = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Presses inside the panel must not reach the backdrop.
    let swallow = Callback::from(|event: MouseEvent| event.stop_propagation());

    let mut class = classes!("sheet");
    class.push(props.sheet_class.clone());

    html! {
        <div class="sheet-backdrop" role="presentation" onclick={on_backdrop}>
            <div class={class} role="dialog" aria-modal="true" onclick={swallow}>
                <div class="sheet__handle" aria-hidden="true" />
                <div class="sheet__header">
                    { props.header.clone() }
                    <button
                        type="button"
                        class="sheet__close"
                        aria-label="Close"
                        onclick={on_close_button}
                    >
                        {"X"}
                    </button>
                </div>
                <div class="sheet__body">
                    { for props.children.iter() }
                </div>
                <div class="sheet__footer">
                    { props.footer.clone() }
                </div>
            </div>
        </div>
    }
}
