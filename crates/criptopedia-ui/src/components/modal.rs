//! Modal frame shared by the login, search, editor, and confirmation dialogs.
//!
//! # Design
//! - Presence is decided by the caller from store state; the frame never hides itself.
//! - Backdrop clicks close; clicks inside the body do not bubble to the backdrop.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalFrameProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalFrame)]
pub(crate) fn modal_frame(props: &ModalFrameProps) -> Html {
    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close_button = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class={classes!("modal", props.class.clone())}
                role="dialog"
                aria-modal="true"
                onclick={stop}
            >
                <header class="modal-header">
                    <h3>{props.title.clone()}</h3>
                    <button class="ghost" aria-label="Cerrar" onclick={on_close_button}>{"✕"}</button>
                </header>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
