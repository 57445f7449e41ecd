//! Catalog grid and algorithm cards.

use crate::app::Controller;
use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::catalog::state::{CardView, CatalogView, catalog_view};
use crate::features::editor::reducers::{open_add_editor, open_edit_editor, request_delete};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogGridProps {
    pub controller: Controller,
}

#[function_component(CatalogGrid)]
pub(crate) fn catalog_grid(props: &CatalogGridProps) -> Html {
    let view = use_selector(|store: &AppStore| catalog_view(&store.catalog, &store.session));
    let dispatch = Dispatch::<AppStore>::new();

    match &*view {
        CatalogView::Loading => html! {
            <EmptyState
                class="loading"
                icon="⏳"
                title="Cargando algoritmos..."
                description="Consultando el catálogo"
            />
        },
        CatalogView::Failed { message } => {
            let controller = props.controller.clone();
            let on_retry = Callback::from(move |_: MouseEvent| controller.refresh_catalog());
            html! {
                <EmptyState
                    class="error"
                    icon="⚠️"
                    title="Error cargando los algoritmos"
                    description={AttrValue::from(message.clone())}
                >
                    <button class="solid" onclick={on_retry}>{"Reintentar"}</button>
                </EmptyState>
            }
        }
        CatalogView::Empty { can_add } => {
            let on_add = Callback::from(move |_: MouseEvent| dispatch.reduce_mut(open_add_editor));
            html! {
                <EmptyState icon="📭" title="No hay algoritmos registrados">
                    {if *can_add {
                        html! { <button class="solid success" onclick={on_add}>{"➕ Agregar el primer algoritmo"}</button> }
                    } else {
                        html! {}
                    }}
                </EmptyState>
            }
        }
        CatalogView::Cards(cards) => html! {
            <section class="algorithm-grid">
                {for cards.iter().map(|card| render_card(card, &props.controller, &dispatch))}
            </section>
        },
    }
}

fn render_card(card: &CardView, controller: &Controller, dispatch: &Dispatch<AppStore>) -> Html {
    let on_quick_search = {
        let controller = controller.clone();
        let id = card.id.clone();
        Callback::from(move |_: MouseEvent| controller.quick_search(id.clone()))
    };
    let admin_controls = if card.admin {
        let on_edit = {
            let dispatch = dispatch.clone();
            let id = card.id.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|store| {
                    open_edit_editor(store, &id);
                });
            })
        };
        let on_delete = {
            let dispatch = dispatch.clone();
            let id = card.id.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|store| {
                    request_delete(store, &id);
                });
            })
        };
        html! {
            <div class="card-admin">
                <button class="ghost" title="Editar" onclick={on_edit}>{"✏️"}</button>
                <button class="ghost danger" title="Eliminar" onclick={on_delete}>{"🗑️"}</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <article class="algorithm-card" key={card.id.clone()}>
            <header class="card-header">
                <h3>{card.name.clone()}</h3>
                {admin_controls}
            </header>
            <div class="badges">
                <span class="badge category">{card.category.clone()}</span>
                <span class={classes!("badge", "difficulty", card.difficulty_tone)}>{card.difficulty.clone()}</span>
                <span class="badge key-type">{card.key_type.clone()}</span>
            </div>
            <p class="description">{card.description.clone()}</p>
            <dl class="examples">
                <dt>{"🔒 Encriptar"}</dt>
                <dd><code>{card.encryption_example.clone()}</code></dd>
                <dt>{"🔓 Desencriptar"}</dt>
                <dd><code>{card.decryption_example.clone()}</code></dd>
            </dl>
            <button class="solid accent" onclick={on_quick_search}>{"🎬 Buscar videos"}</button>
            {if card.admin {
                html! { <footer class="card-footer muted">{format!("ID: {}", card.id)}</footer> }
            } else {
                html! {}
            }}
        </article>
    }
}
