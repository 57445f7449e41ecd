//! Editor and delete-confirmation reducers.

use crate::core::error::ClientError;
use crate::core::store::{AppStore, notify};
use crate::features::editor::state::{
    DeleteConfirmation, EditorMode, EditorPhase, EditorState, EditorSubmission, FormField,
};
use crate::models::{MutationResponse, ToastKind};

/// Toast shown after a record is deleted.
pub const DELETE_SUCCEEDED: &str = "🗑️ Algoritmo eliminado correctamente";

/// Open a blank add form. Ignored without an admin session.
pub fn open_add_editor(store: &mut AppStore) {
    if store.session.is_admin() {
        store.editor = Some(EditorState::add());
    }
}

/// Open the edit form for `id`; returns `false` (and notifies) when the record is gone.
pub fn open_edit_editor(store: &mut AppStore, id: &str) -> bool {
    if !store.session.is_admin() {
        return false;
    }
    let Some(record) = store.catalog.find_by_id(id) else {
        notify_not_found(store, id);
        return false;
    };
    store.editor = Some(EditorState::edit(record));
    true
}

/// Forward one input change to the open editor.
pub fn update_editor_field(store: &mut AppStore, field: FormField, value: String) {
    if let Some(editor) = store.editor.as_mut() {
        editor.set_field(field, value);
    }
}

/// Close the editor.
pub fn close_editor(store: &mut AppStore) {
    store.editor = None;
}

/// Validate the open form and move it to `Submitting`.
///
/// Returns `None` when nothing should be sent: no editor, a request already
/// running, or a validation failure (which is notified and leaves the form open).
pub fn begin_editor_submit(store: &mut AppStore) -> Option<EditorSubmission> {
    let editor = store.editor.as_mut()?;
    if editor.is_submitting() {
        return None;
    }
    match editor.form.to_record(&editor.mode) {
        Ok(record) => {
            editor.phase = EditorPhase::Submitting;
            Some(EditorSubmission {
                mode: editor.mode.clone(),
                record,
            })
        }
        Err(err) => {
            notify(store, ClientError::from(err).to_string(), ToastKind::Error);
            None
        }
    }
}

/// Apply a create/update outcome. Returns `true` when the catalog should be refreshed.
pub fn apply_editor_result(
    store: &mut AppStore,
    mode: &EditorMode,
    result: Result<MutationResponse, ClientError>,
) -> bool {
    let matches_open = store
        .editor
        .as_ref()
        .is_some_and(|editor| &editor.mode == mode);
    match result {
        Ok(_) => {
            if matches_open {
                store.editor = None;
            }
            notify(store, mode.success_message(), ToastKind::Success);
            true
        }
        Err(err) => {
            if let Some(editor) = store.editor.as_mut().filter(|_| matches_open) {
                editor.phase = EditorPhase::Editing;
            }
            notify(store, mode.failure_message(&err.to_string()), ToastKind::Error);
            false
        }
    }
}

/// Ask for confirmation before deleting `id`.
pub fn request_delete(store: &mut AppStore, id: &str) -> bool {
    if !store.session.is_admin() {
        return false;
    }
    let Some(record) = store.catalog.find_by_id(id) else {
        notify_not_found(store, id);
        return false;
    };
    store.confirm = Some(DeleteConfirmation {
        id: record.id.clone(),
        name: record.name.clone(),
        phase: EditorPhase::Editing,
    });
    true
}

/// Dismiss the confirmation without deleting.
pub fn cancel_delete(store: &mut AppStore) {
    store.confirm = None;
}

/// Confirm the pending delete; returns the id to send, or `None` when nothing should be sent.
pub fn begin_delete(store: &mut AppStore) -> Option<String> {
    let confirm = store.confirm.as_ref()?;
    if confirm.phase == EditorPhase::Submitting {
        return None;
    }
    let id = confirm.id.clone();
    if store.catalog.find_by_id(&id).is_none() {
        store.confirm = None;
        notify_not_found(store, &id);
        return None;
    }
    if let Some(confirm) = store.confirm.as_mut() {
        confirm.phase = EditorPhase::Submitting;
    }
    Some(id)
}

/// Apply a delete outcome. Returns `true` when the catalog should be refreshed.
pub fn apply_delete_result(
    store: &mut AppStore,
    id: &str,
    result: Result<MutationResponse, ClientError>,
) -> bool {
    let matches_open = store.confirm.as_ref().is_some_and(|confirm| confirm.id == id);
    match result {
        Ok(_) => {
            if matches_open {
                store.confirm = None;
            }
            notify(store, DELETE_SUCCEEDED, ToastKind::Success);
            true
        }
        Err(err) => {
            if let Some(confirm) = store.confirm.as_mut().filter(|_| matches_open) {
                confirm.phase = EditorPhase::Editing;
            }
            notify(
                store,
                format!("Error eliminando algoritmo: {err}"),
                ToastKind::Error,
            );
            false
        }
    }
}

fn notify_not_found(store: &mut AppStore, id: &str) {
    let err = ClientError::NotFoundLocal { id: id.to_string() };
    notify(store, err.to_string(), ToastKind::Error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::SessionState;
    use crate::features::catalog::state::tests::record;
    use crate::core::error::decode_mutation_body;

    fn admin_store() -> AppStore {
        let mut store = AppStore::default();
        store.session = SessionState::restored();
        store
            .catalog
            .replace_snapshot(vec![record("cesar", "César"), record("rot13", "ROT13")]);
        store
    }

    fn ok_response() -> MutationResponse {
        MutationResponse {
            success: Some(true),
            message: Some("ok".to_string()),
            algorithm: None,
        }
    }

    #[test]
    fn add_requires_admin_session() {
        let mut store = AppStore::default();
        open_add_editor(&mut store);
        assert!(store.editor.is_none());
    }

    #[test]
    fn blank_name_blocks_submission() {
        let mut store = admin_store();
        open_add_editor(&mut store);
        update_editor_field(&mut store, FormField::Description, "d".to_string());
        assert!(begin_editor_submit(&mut store).is_none());
        let editor = store.editor.as_ref().expect("still open");
        assert_eq!(editor.phase, EditorPhase::Editing);
        let toast = store.notifications.latest().expect("toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("Nombre"));
        assert!(toast.message.contains("ID único"));
    }

    #[test]
    fn failed_update_reopens_form() {
        let mut store = admin_store();
        assert!(open_edit_editor(&mut store, "cesar"));
        let submission = begin_editor_submit(&mut store).expect("valid edit");
        assert!(begin_editor_submit(&mut store).is_none());
        let refresh = apply_editor_result(
            &mut store,
            &submission.mode,
            Err(ClientError::Server {
                status: 404,
                message: "Algoritmo no encontrado".to_string(),
            }),
        );
        assert!(!refresh);
        assert_eq!(
            store.editor.as_ref().map(|editor| editor.phase),
            Some(EditorPhase::Editing)
        );
        assert_eq!(
            store.notifications.latest().map(|t| t.message.as_str()),
            Some("❌ Error: Algoritmo no encontrado")
        );
    }

    #[test]
    fn successful_create_closes_form() {
        let mut store = admin_store();
        open_add_editor(&mut store);
        for (field, value) in [
            (FormField::Name, "Base64"),
            (FormField::Description, "Codificación binaria a texto"),
        ] {
            update_editor_field(&mut store, field, value.to_string());
        }
        let submission = begin_editor_submit(&mut store).expect("valid add");
        assert_eq!(submission.record.id, "base64");
        assert!(apply_editor_result(&mut store, &submission.mode, Ok(ok_response())));
        assert!(store.editor.is_none());
    }

    #[test]
    fn edit_of_missing_record_notifies() {
        let mut store = admin_store();
        assert!(!open_edit_editor(&mut store, "enigma"));
        assert!(store.editor.is_none());
        assert_eq!(
            store.notifications.latest().map(|t| t.message.as_str()),
            Some("Algoritmo no encontrado")
        );
    }

    #[test]
    fn delete_requires_confirmation_and_record() {
        let mut store = admin_store();
        assert!(begin_delete(&mut store).is_none());
        assert!(request_delete(&mut store, "rot13"));
        assert!(store.confirm.as_ref().is_some_and(|c| c.prompt().contains("ROT13")));

        store.catalog.replace_snapshot(vec![record("cesar", "César")]);
        assert!(begin_delete(&mut store).is_none());
        assert!(store.confirm.is_none());
        assert_eq!(
            store.notifications.latest().map(|t| t.message.as_str()),
            Some("Algoritmo no encontrado")
        );
    }

    #[test]
    fn delete_failure_keeps_confirmation_open() {
        let mut store = admin_store();
        request_delete(&mut store, "rot13");
        let id = begin_delete(&mut store).expect("confirmed");
        let refresh = apply_delete_result(
            &mut store,
            &id,
            Err(ClientError::Network("offline".to_string())),
        );
        assert!(!refresh);
        assert_eq!(
            store.confirm.as_ref().map(|c| c.phase),
            Some(EditorPhase::Editing)
        );
        assert_eq!(
            store.notifications.latest().map(|t| t.message.as_str()),
            Some("Error eliminando algoritmo: Error de conexión con el servidor")
        );
    }

    #[test]
    fn created_record_body_counts_as_success() {
        let mut store = admin_store();
        open_add_editor(&mut store);
        let body = serde_json::to_string(&record("aes", "AES")).expect("encode");
        let result = decode_mutation_body(201, &body, "Error creando algoritmo");
        assert!(apply_editor_result(&mut store, &EditorMode::Add, result));
        assert!(store.editor.is_none());
        assert_eq!(
            store.notifications.latest().map(|t| t.kind),
            Some(ToastKind::Success)
        );
    }

    #[test]
    fn delete_confirmation_without_flag_counts_as_success() {
        let mut store = admin_store();
        assert!(request_delete(&mut store, "rot13"));
        let id = begin_delete(&mut store).expect("confirmed");
        let result = decode_mutation_body(
            200,
            r#"{"message":"ok"}"#,
            "Error eliminando algoritmo",
        );
        assert!(apply_delete_result(&mut store, &id, result));
        assert!(store.confirm.is_none());
        assert_eq!(
            store.notifications.latest().map(|t| t.message.as_str()),
            Some(DELETE_SUCCEEDED)
        );
    }
}
