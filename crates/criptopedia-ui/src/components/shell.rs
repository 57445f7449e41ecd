//! Page header and main layout.

use crate::app::Controller;
use crate::core::store::AppStore;
use crate::features::editor::reducers::open_add_editor;
use crate::features::session::reducers::open_login;
use crate::features::videos::reducers::open_search;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub controller: Controller,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let admin = session.is_admin();

    let on_admin = {
        let dispatch = dispatch.clone();
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| {
            if admin {
                controller.logout();
            } else {
                dispatch.reduce_mut(open_login);
            }
        })
    };
    let on_add = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(open_add_editor))
    };
    let on_search = Callback::from(move |_: MouseEvent| dispatch.reduce_mut(open_search));

    html! {
        <div class="app-shell">
            <header class="app-header">
                <div class="brand">
                    <h1>{"Criptopedia Universal"}</h1>
                    <p class="muted">{"Catálogo de algoritmos de cifrado, codificación y hash"}</p>
                </div>
                <nav class="header-actions">
                    {if admin {
                        html! {
                            <span class="admin-indicator" title={session.username.clone().unwrap_or_default()}>
                                {"🛡️ Modo edición"}
                            </span>
                        }
                    } else {
                        html! {}
                    }}
                    {if admin {
                        html! { <button class="solid success" onclick={on_add}>{"➕ Agregar algoritmo"}</button> }
                    } else {
                        html! {}
                    }}
                    <button class="solid accent" onclick={on_search}>{"🎬 Buscar videos"}</button>
                    <button class={classes!("ghost", admin.then_some("active"))} onclick={on_admin}>
                        {if admin { "🔒 Salir" } else { "🔐 Admin" }}
                    </button>
                </nav>
            </header>
            <main class="app-main">
                { for props.children.iter() }
            </main>
        </div>
    }
}
