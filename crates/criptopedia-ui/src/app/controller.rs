//! Side-effecting app actions.
//!
//! # Design
//! - Reducers decide; the controller only sequences network calls around them.
//! - Every failure is logged to the console before it reaches the store.
//! - Shared with views through context so buttons call named actions, not closures.

use crate::app::api::ApiCtx;
use crate::app::preferences::{clear_session_marker, load_session_marker, persist_session_marker};
use crate::core::auth::has_session_marker;
use crate::core::store::AppStore;
use crate::features::catalog::reducers::{apply_catalog_loaded, begin_catalog_load};
use crate::features::editor::reducers::{
    apply_delete_result, apply_editor_result, begin_delete, begin_editor_submit,
};
use crate::features::editor::state::{EditorMode, EditorSubmission};
use crate::features::session::reducers::{
    apply_login_result, apply_logout, apply_session_check, begin_login,
};
use crate::features::videos::reducers::{
    apply_video_result, begin_search_for, begin_video_search, prepare_quick_search, retry_target,
};
use crate::features::videos::state::{QUICK_SEARCH_DELAY_MS, SearchTarget};
use crate::models::LoginRequest;
use gloo::console;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yewdux::prelude::Dispatch;

/// Store dispatch plus API client.
#[derive(Clone)]
pub(crate) struct Controller {
    dispatch: Dispatch<AppStore>,
    api: ApiCtx,
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api
    }
}

impl Controller {
    pub(crate) fn new(api: ApiCtx) -> Self {
        Self {
            dispatch: Dispatch::<AppStore>::new(),
            api,
        }
    }

    /// Fetch the full catalog and replace the snapshot.
    pub(crate) fn refresh_catalog(&self) {
        self.dispatch.reduce_mut(|store| begin_catalog_load(store));
        let client = self.api.client.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let result = client.list_algorithms().await;
            if let Err(err) = &result {
                console::error!("catalog load failed", err.log_detail());
            }
            dispatch.reduce_mut(|store| apply_catalog_loaded(store, result));
        });
    }

    /// Ask the backend whether a persisted session is still valid.
    pub(crate) fn check_session(&self) {
        if !has_session_marker(load_session_marker().as_deref()) {
            return;
        }
        let client = self.api.client.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let result = client.check_session().await;
            let mut restored = false;
            dispatch.reduce_mut(|store| {
                restored = apply_session_check(store, &result);
            });
            if !restored {
                let detail = result.err().map(|err| err.log_detail()).unwrap_or_default();
                console::log!("no active session", detail);
            }
        });
    }

    pub(crate) fn login(&self, username: String, password: String) {
        let mut started = false;
        self.dispatch.reduce_mut(|store| {
            started = begin_login(store);
        });
        if !started {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            let credentials = LoginRequest { username, password };
            let result = this.api.client.login(&credentials).await;
            if let Err(err) = &result {
                console::error!("login failed", err.log_detail());
            }
            let mut signed_in = false;
            this.dispatch.reduce_mut(|store| {
                signed_in = apply_login_result(store, result);
            });
            if signed_in {
                persist_session_marker();
                this.refresh_catalog();
            }
        });
    }

    pub(crate) fn logout(&self) {
        clear_session_marker();
        self.dispatch.reduce_mut(|store| apply_logout(store));
        self.refresh_catalog();
    }

    /// Validate the open editor and send the create/update.
    pub(crate) fn submit_editor(&self) {
        let mut submission = None;
        self.dispatch.reduce_mut(|store| {
            submission = begin_editor_submit(store);
        });
        let Some(EditorSubmission { mode, record }) = submission else {
            return;
        };
        let this = self.clone();
        spawn_local(async move {
            let client = this.api.client.clone();
            let result = match &mode {
                EditorMode::Add => client.create_algorithm(&record).await,
                EditorMode::Edit { id } => client.update_algorithm(id, &record).await,
            };
            if let Err(err) = &result {
                console::error!("algorithm save failed", record.id.clone(), err.log_detail());
            }
            let mut refresh = false;
            this.dispatch.reduce_mut(|store| {
                refresh = apply_editor_result(store, &mode, result);
            });
            if refresh {
                this.refresh_catalog();
            }
        });
    }

    /// Send the delete confirmed in the open confirmation modal.
    pub(crate) fn confirm_delete(&self) {
        let mut pending = None;
        self.dispatch.reduce_mut(|store| {
            pending = begin_delete(store);
        });
        let Some(id) = pending else {
            return;
        };
        let this = self.clone();
        spawn_local(async move {
            let result = this.api.client.delete_algorithm(&id).await;
            if let Err(err) = &result {
                console::error!("algorithm delete failed", id.clone(), err.log_detail());
            }
            let mut refresh = false;
            this.dispatch.reduce_mut(|store| {
                refresh = apply_delete_result(store, &id, result);
            });
            if refresh {
                this.refresh_catalog();
            }
        });
    }

    /// Search videos for the current selection.
    pub(crate) fn search(&self) {
        let mut target = None;
        self.dispatch.reduce_mut(|store| {
            target = begin_video_search(store);
        });
        if let Some(target) = target {
            self.run_search(target);
        }
    }

    /// Re-send the search shown as failed in the results panel.
    pub(crate) fn retry_search(&self) {
        let Some(target) = retry_target(&self.dispatch.get()) else {
            return;
        };
        self.dispatch
            .reduce_mut(|store| begin_search_for(store, &target));
        self.run_search(target);
    }

    /// Open the search modal on `id` and search after a short delay.
    pub(crate) fn quick_search(&self, id: String) {
        self.dispatch
            .reduce_mut(|store| prepare_quick_search(store, &id));
        let this = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(QUICK_SEARCH_DELAY_MS).await;
            this.search();
        });
    }

    fn run_search(&self, target: SearchTarget) {
        let client = self.api.client.clone();
        let dispatch = self.dispatch.clone();
        spawn_local(async move {
            let result = client.search_videos(&target.query).await;
            if let Err(err) = &result {
                console::error!("video search failed", target.query.clone(), err.log_detail());
            }
            dispatch.reduce_mut(|store| apply_video_result(store, target, result));
        });
    }
}
