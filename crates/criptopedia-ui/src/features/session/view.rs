//! Admin login modal.

use crate::app::Controller;
use crate::components::modal::ModalFrame;
use crate::core::store::AppStore;
use crate::features::session::reducers::close_login;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct LoginModalProps {
    pub controller: Controller,
}

#[function_component(LoginModal)]
pub(crate) fn login_modal(props: &LoginModalProps) -> Html {
    let overlays = use_selector(|store: &AppStore| store.overlays);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let dispatch = Dispatch::<AppStore>::new();

    if !overlays.login_open {
        return html! {};
    }

    let on_close = Callback::from(move |()| dispatch.reduce_mut(close_login));
    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_submit = {
        let controller = props.controller.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.login((*username).clone(), (*password).clone());
        })
    };

    html! {
        <ModalFrame title="🔐 Acceso administrador" on_close={on_close}>
            <form class="stack" onsubmit={on_submit}>
                <label class="stack">
                    <span>{"Usuario"}</span>
                    <input
                        type="text"
                        autocomplete="username"
                        value={(*username).clone()}
                        oninput={on_username}
                        disabled={overlays.login_busy}
                    />
                </label>
                <label class="stack">
                    <span>{"Contraseña"}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password}
                        disabled={overlays.login_busy}
                    />
                </label>
                <div class="actions">
                    <button type="submit" class="solid" disabled={overlays.login_busy}>
                        {if overlays.login_busy { "Verificando..." } else { "Iniciar sesión" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
