//! Add/edit modal and delete confirmation.

use crate::app::Controller;
use crate::components::modal::ModalFrame;
use crate::core::store::AppStore;
use crate::features::editor::reducers::{cancel_delete, close_editor, update_editor_field};
use crate::features::editor::state::{EditorPhase, EditorState, FormField};
use crate::models::{Category, Difficulty, KeyType};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct EditorModalProps {
    pub controller: Controller,
}

#[function_component(EditorModal)]
pub(crate) fn editor_modal(props: &EditorModalProps) -> Html {
    let editor = use_selector(|store: &AppStore| store.editor.clone());
    let dispatch = Dispatch::<AppStore>::new();

    let Some(editor) = &*editor else {
        return html! {};
    };

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(close_editor))
    };
    let on_submit = {
        let controller = props.controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.submit_editor();
        })
    };
    let busy = editor.is_submitting();

    html! {
        <ModalFrame title={editor.mode.title()} on_close={on_close} class="editor">
            <form class="form-grid" onsubmit={on_submit}>
                {text_input(editor, FormField::Name, "Ej: AES Encryption", &dispatch)}
                {text_input(editor, FormField::Id, "aes-encryption", &dispatch)}
                {select_input(editor, FormField::Category, known_labels(&Category::known(), Category::label), &dispatch)}
                {select_input(editor, FormField::Difficulty, known_labels(&Difficulty::known(), Difficulty::label), &dispatch)}
                {textarea_input(editor, FormField::Description, "Describe brevemente cómo funciona el algoritmo...", &dispatch)}
                {text_input(editor, FormField::EncryptionExample, "Texto 'HOLA' → 'KROD'", &dispatch)}
                {text_input(editor, FormField::DecryptionExample, "Texto 'KROD' → 'HOLA'", &dispatch)}
                {select_input(editor, FormField::KeyType, known_labels(&KeyType::known(), KeyType::label), &dispatch)}
                <div class="actions span-2">
                    <button type="button" class="ghost" onclick={
                        let dispatch = dispatch.clone();
                        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(close_editor))
                    }>{"Cancelar"}</button>
                    <button type="submit" class="solid success" disabled={busy}>
                        {if busy { "Guardando..." } else { editor.mode.submit_label() }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

fn field_label(editor: &EditorState, field: FormField) -> String {
    let marker = if editor.mode.is_required(field) { " *" } else { "" };
    format!("{}{marker}", field.label())
}

fn known_labels<T>(values: &[T], label: fn(&T) -> &str) -> Vec<String> {
    values.iter().map(|value| label(value).to_string()).collect()
}

fn text_input(
    editor: &EditorState,
    field: FormField,
    placeholder: &'static str,
    dispatch: &Dispatch<AppStore>,
) -> Html {
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatch.reduce_mut(|store| update_editor_field(store, field, input.value()));
            }
        })
    };
    let read_only = field == FormField::Id && !editor.id_editable();
    html! {
        <label class="stack">
            <span>{field_label(editor, field)}</span>
            <input
                type="text"
                placeholder={placeholder}
                value={editor.form.value(field).to_string()}
                readonly={read_only}
                disabled={editor.phase == EditorPhase::Submitting}
                {oninput}
            />
        </label>
    }
}

fn textarea_input(
    editor: &EditorState,
    field: FormField,
    placeholder: &'static str,
    dispatch: &Dispatch<AppStore>,
) -> Html {
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                dispatch.reduce_mut(|store| update_editor_field(store, field, input.value()));
            }
        })
    };
    html! {
        <label class="stack span-2">
            <span>{field_label(editor, field)}</span>
            <textarea
                rows="3"
                placeholder={placeholder}
                value={editor.form.value(field).to_string()}
                disabled={editor.phase == EditorPhase::Submitting}
                {oninput}
            />
        </label>
    }
}

fn select_input(
    editor: &EditorState,
    field: FormField,
    mut options: Vec<String>,
    dispatch: &Dispatch<AppStore>,
) -> Html {
    let current = editor.form.value(field).to_string();
    if !current.is_empty() && !options.contains(&current) {
        options.push(current.clone());
    }
    let onchange = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                dispatch.reduce_mut(|store| update_editor_field(store, field, select.value()));
            }
        })
    };
    html! {
        <label class="stack">
            <span>{field_label(editor, field)}</span>
            <select disabled={editor.phase == EditorPhase::Submitting} {onchange}>
                {for options.iter().map(|option| html! {
                    <option value={option.clone()} selected={*option == current}>{option.clone()}</option>
                })}
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDeleteModalProps {
    pub controller: Controller,
}

#[function_component(ConfirmDeleteModal)]
pub(crate) fn confirm_delete_modal(props: &ConfirmDeleteModalProps) -> Html {
    let confirm = use_selector(|store: &AppStore| store.confirm.clone());
    let dispatch = Dispatch::<AppStore>::new();

    let Some(confirm) = &*confirm else {
        return html! {};
    };

    let busy = confirm.phase == EditorPhase::Submitting;
    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(cancel_delete))
    };
    let on_cancel = Callback::from(move |_: MouseEvent| dispatch.reduce_mut(cancel_delete));
    let on_confirm = {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| controller.confirm_delete())
    };

    html! {
        <ModalFrame title="🗑️ Eliminar algoritmo" on_close={on_close} class="confirm">
            <p>{confirm.prompt()}</p>
            <div class="actions">
                <button class="ghost" onclick={on_cancel}>{"Cancelar"}</button>
                <button class="solid danger" onclick={on_confirm} disabled={busy}>
                    {if busy { "Eliminando..." } else { "Eliminar" }}
                </button>
            </div>
        </ModalFrame>
    }
}
