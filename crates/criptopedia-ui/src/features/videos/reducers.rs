//! Video search reducers.

use crate::core::error::ClientError;
use crate::core::store::{AppStore, notify};
use crate::features::videos::state::{SearchTarget, SelectChoice, VideoPanel, video_panel};
use crate::models::{ToastKind, VideoSearchResponse};

/// Open the search modal.
pub fn open_search(store: &mut AppStore) {
    store.overlays.search_open = true;
}

/// Close the search modal.
pub fn close_search(store: &mut AppStore) {
    store.overlays.search_open = false;
}

/// Apply a select change.
pub fn select_search_choice(store: &mut AppStore, value: &str) {
    store.videos.selection.choice = SelectChoice::from_value(value);
}

/// Apply a free-text change.
pub fn set_custom_text(store: &mut AppStore, text: String) {
    store.videos.selection.custom_text = text;
}

/// Resolve the current selection and show the loading panel.
/// Validation failures are notified and return `None`.
pub fn begin_video_search(store: &mut AppStore) -> Option<SearchTarget> {
    match store.videos.selection.resolve(&store.catalog) {
        Ok(target) => {
            begin_search_for(store, &target);
            Some(target)
        }
        Err(err) => {
            notify(store, err.to_string(), ToastKind::Error);
            None
        }
    }
}

/// Show the loading panel for an already-resolved target (retry path).
pub fn begin_search_for(store: &mut AppStore, target: &SearchTarget) {
    store.videos.panel = VideoPanel::Loading {
        label: target.label.clone(),
    };
}

/// Target of the failed search shown in the panel, if any.
#[must_use]
pub fn retry_target(store: &AppStore) -> Option<SearchTarget> {
    match &store.videos.panel {
        VideoPanel::Failed { target, .. } => Some(target.clone()),
        _ => None,
    }
}

/// Apply a search outcome.
pub fn apply_video_result(
    store: &mut AppStore,
    target: SearchTarget,
    result: Result<VideoSearchResponse, ClientError>,
) {
    store.videos.panel = match result {
        Ok(response) => video_panel(&response),
        Err(err) => VideoPanel::Failed {
            target,
            message: err.to_string(),
        },
    };
}

/// Pre-select `id` and open the modal; the caller starts the search after the delay.
pub fn prepare_quick_search(store: &mut AppStore, id: &str) {
    store.videos.selection.choice = SelectChoice::Catalog(id.to_string());
    store.videos.selection.custom_text.clear();
    store.overlays.search_open = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::state::tests::record;

    #[test]
    fn blank_selection_notifies_without_loading() {
        let mut store = AppStore::default();
        assert!(begin_video_search(&mut store).is_none());
        assert_eq!(store.videos.panel, VideoPanel::Idle);
        assert_eq!(
            store.notifications.latest().map(|t| t.message.as_str()),
            Some("Por favor selecciona un algoritmo")
        );
    }

    #[test]
    fn quick_search_preselects_and_opens() {
        let mut store = AppStore::default();
        store
            .catalog
            .replace_snapshot(vec![record("rot13", "ROT13")]);
        set_custom_text(&mut store, "stale".to_string());
        prepare_quick_search(&mut store, "rot13");
        assert!(store.overlays.search_open);
        let target = begin_video_search(&mut store).expect("resolved");
        assert_eq!(target.label, "ROT13");
        assert_eq!(
            store.videos.panel,
            VideoPanel::Loading {
                label: "ROT13".to_string()
            }
        );
    }

    #[test]
    fn failure_panel_retries_same_target() {
        let mut store = AppStore::default();
        select_search_choice(&mut store, "custom");
        set_custom_text(&mut store, "Enigma".to_string());
        let target = begin_video_search(&mut store).expect("resolved");
        apply_video_result(
            &mut store,
            target.clone(),
            Err(ClientError::Server {
                status: 500,
                message: "Error en la búsqueda".to_string(),
            }),
        );
        assert_eq!(retry_target(&store), Some(target));
    }
}
