//! Video search modal and results panel.

use crate::app::Controller;
use crate::components::atoms::EmptyState;
use crate::components::modal::ModalFrame;
use crate::core::store::AppStore;
use crate::features::catalog::state::select_options;
use crate::features::videos::reducers::{close_search, select_search_choice, set_custom_text};
use crate::features::videos::state::{VideoCard, VideoPanel, VideoResultsView};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct VideoSearchModalProps {
    pub controller: Controller,
}

#[function_component(VideoSearchModal)]
pub(crate) fn video_search_modal(props: &VideoSearchModalProps) -> Html {
    let open = use_selector(|store: &AppStore| store.overlays.search_open);
    let options = use_selector(|store: &AppStore| select_options(&store.catalog));
    let selection = use_selector(|store: &AppStore| store.videos.selection.clone());
    let panel = use_selector(|store: &AppStore| store.videos.panel.clone());
    let dispatch = Dispatch::<AppStore>::new();

    if !*open {
        return html! {};
    }

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(close_search))
    };
    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                dispatch.reduce_mut(|store| select_search_choice(store, &select.value()));
            }
        })
    };
    let on_custom = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            dispatch.reduce_mut(|store| set_custom_text(store, input.value()));
        }
    });
    let on_search = {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| controller.search())
    };
    let current = selection.choice.value().to_string();
    let searching = matches!(&*panel, VideoPanel::Loading { .. });

    html! {
        <ModalFrame title="🎬 Buscar videos del algoritmo" on_close={on_close} class="search">
            <div class="search-controls">
                <select onchange={on_select}>
                    {for options.iter().map(|option| html! {
                        <option value={option.value.clone()} selected={option.value == current}>
                            {option.label.clone()}
                        </option>
                    })}
                </select>
                {if selection.shows_custom_input() {
                    html! {
                        <input
                            type="text"
                            placeholder="Ej: Blowfish, Enigma, SHA-3..."
                            value={selection.custom_text.clone()}
                            oninput={on_custom}
                        />
                    }
                } else {
                    html! {}
                }}
                <button class="solid accent" onclick={on_search} disabled={searching}>
                    {"🔍 Buscar"}
                </button>
            </div>
            <div class="video-results">
                {render_panel(&panel, &props.controller)}
            </div>
        </ModalFrame>
    }
}

fn render_panel(panel: &VideoPanel, controller: &Controller) -> Html {
    match panel {
        VideoPanel::Idle => html! {
            <EmptyState
                icon="🎯"
                title="Selecciona un algoritmo"
                description="Elige un algoritmo del catálogo o escribe uno personalizado."
            />
        },
        VideoPanel::Loading { label } => html! {
            <EmptyState
                class="loading"
                icon="⏳"
                title={AttrValue::from(format!("Buscando videos para: {label}"))}
                description="Consultando el servicio de videos..."
            />
        },
        VideoPanel::Empty { algorithm_name } => html! {
            <EmptyState
                icon="📭"
                title="No se encontraron videos"
                description={AttrValue::from(format!("No hay contenido disponible para {algorithm_name}"))}
            />
        },
        VideoPanel::Failed { target, message } => {
            let controller = controller.clone();
            let on_retry = Callback::from(move |_: MouseEvent| controller.retry_search());
            html! {
                <EmptyState
                    class="error"
                    icon="⚠️"
                    title={AttrValue::from(format!("Error en búsqueda de videos: {}", target.label))}
                    description={AttrValue::from(message.clone())}
                >
                    <button class="solid" onclick={on_retry}>{"Reintentar búsqueda"}</button>
                </EmptyState>
            }
        }
        VideoPanel::Results(view) => render_results(view),
    }
}

fn render_results(view: &VideoResultsView) -> Html {
    html! {
        <>
            <header class="results-header">
                <div>
                    <h4>{view.algorithm_name.clone()}</h4>
                    <p>{format!("{} videos encontrados", view.total_results)}</p>
                    <p class="muted">
                        {format!("{} reales · {} de respaldo · {}", view.real_count, view.fallback_count, view.backend_label)}
                    </p>
                </div>
                {if view.api_active {
                    html! { <span class="badge success">{"✔ API activa"}</span> }
                } else {
                    html! {}
                }}
            </header>
            <div class="video-grid">
                {for view.cards.iter().map(render_video)}
            </div>
        </>
    }
}

fn render_video(card: &VideoCard) -> Html {
    html! {
        <article class="video-card" key={card.key.clone()}>
            <a class="thumbnail" href={card.watch_url.clone()} target="_blank" rel="noopener noreferrer">
                <img src={card.thumbnail.clone()} alt={card.title.clone()} loading="lazy" />
                {card.badge.map(|badge| html! {
                    <span class={classes!("badge", "video-badge", badge.label().to_lowercase())}>
                        {badge.label()}
                    </span>
                }).unwrap_or_default()}
            </a>
            <div class="video-body">
                <h5>{card.title.clone()}</h5>
                <p class="muted">{card.channel.clone()}</p>
                {card.search_term.clone().map(|term| html! {
                    <p class="muted small">{format!("🔍 Búsqueda: \"{term}\"")}</p>
                }).unwrap_or_default()}
                <a class="solid accent" href={card.watch_url.clone()} target="_blank" rel="noopener noreferrer">
                    {"▶ Ver en YouTube"}
                </a>
            </div>
        </article>
    }
}
