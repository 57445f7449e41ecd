//! App root: boot effects, global key handling, and layout.
//!
//! # Design
//! - One controller per boot, passed to feature views as a prop.
//! - Session check and catalog load start together on mount; neither waits for the other.
//! - Escape closes every open modal.

use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, dismiss_all_overlays, dismiss_notification};
use crate::features::catalog::view::CatalogGrid;
use crate::features::editor::view::{ConfirmDeleteModal, EditorModal};
use crate::features::session::view::LoginModal;
use crate::features::videos::view::VideoSearchModal;
use api::ApiCtx;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod controller;
mod preferences;

pub(crate) use controller::Controller;

#[function_component(CriptopediaApp)]
fn criptopedia_app() -> Html {
    let controller = use_memo(|_| Controller::new(ApiCtx::for_page()), ());
    let dispatch = Dispatch::<AppStore>::new();
    let toasts = use_selector(|store: &AppStore| store.notifications.items().to_vec());

    {
        let controller = (*controller).clone();
        use_effect_with_deps(
            move |_| {
                controller.check_session();
                controller.refresh_catalog();
                || ()
            },
            (),
        );
    }
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key| key.key() == "Escape");
                    if escape {
                        dispatch.reduce_mut(dismiss_all_overlays);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_dismiss = Callback::from(move |id: u64| {
        dispatch.reduce_mut(|store| dismiss_notification(store, id));
    });
    let controller = (*controller).clone();

    html! {
        <>
            <AppShell controller={controller.clone()}>
                <CatalogGrid controller={controller.clone()} />
            </AppShell>
            <LoginModal controller={controller.clone()} />
            <EditorModal controller={controller.clone()} />
            <ConfirmDeleteModal controller={controller.clone()} />
            <VideoSearchModal controller={controller} />
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
        </>
    }
}

/// Mount the app into `#root` (or `<body>` when the element is missing).
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CriptopediaApp>::with_root(root).render();
    } else {
        yew::Renderer::<CriptopediaApp>::new().render();
    }
}
