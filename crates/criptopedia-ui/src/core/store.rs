//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Modal presence is data here; components only render what the store says is open.
//! - Mutation goes through the named reducers in `features::*::reducers`.

use crate::core::auth::SessionState;
use crate::core::notify::Notifications;
use crate::features::catalog::state::CatalogState;
use crate::features::editor::state::{DeleteConfirmation, EditorState};
use crate::features::videos::state::VideoSearchState;
use crate::models::ToastKind;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Admin session flag.
    pub session: SessionState,
    /// Cached catalog snapshot and load status.
    pub catalog: CatalogState,
    /// Video search selection and results.
    pub videos: VideoSearchState,
    /// Add/edit modal, when open.
    pub editor: Option<EditorState>,
    /// Delete confirmation modal, when open.
    pub confirm: Option<DeleteConfirmation>,
    /// Login and search modal visibility.
    pub overlays: Overlays,
    /// Visible toasts.
    pub notifications: Notifications,
}

/// Visibility of the modals that carry no form state in the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    /// Login modal is open.
    pub login_open: bool,
    /// A login request is in flight.
    pub login_busy: bool,
    /// Video search modal is open.
    pub search_open: bool,
}

impl AppStore {
    /// Whether any modal is currently open.
    #[must_use]
    pub const fn any_modal_open(&self) -> bool {
        self.overlays.login_open
            || self.overlays.search_open
            || self.editor.is_some()
            || self.confirm.is_some()
    }
}

/// Push a toast onto the store queue.
pub fn notify(store: &mut AppStore, message: impl Into<String>, kind: ToastKind) -> u64 {
    store.notifications.push(message, kind)
}

/// Dismiss a toast by id.
pub fn dismiss_notification(store: &mut AppStore, id: u64) {
    store.notifications.dismiss(id);
}

/// Close every open modal (Escape key).
pub fn dismiss_all_overlays(store: &mut AppStore) {
    store.overlays.login_open = false;
    store.overlays.search_open = false;
    store.editor = None;
    store.confirm = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_every_modal() {
        let mut store = AppStore::default();
        store.overlays.login_open = true;
        store.overlays.search_open = true;
        store.editor = Some(EditorState::add());
        assert!(store.any_modal_open());
        dismiss_all_overlays(&mut store);
        assert!(!store.any_modal_open());
    }

    #[test]
    fn notifications_flow_through_store() {
        let mut store = AppStore::default();
        let id = notify(&mut store, "hola", ToastKind::Info);
        assert_eq!(store.notifications.items().len(), 1);
        dismiss_notification(&mut store, id);
        assert!(store.notifications.items().is_empty());
    }
}
