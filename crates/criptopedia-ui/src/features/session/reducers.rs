//! Session reducers: login, logout, and restore from a persisted marker.

use crate::core::auth::SessionState;
use crate::core::error::ClientError;
use crate::core::store::{AppStore, notify};
use crate::models::{LoginResponse, SessionCheck, ToastKind};

/// Toast shown after a successful login.
pub const LOGIN_SUCCEEDED: &str = "✅ Modo edición ACTIVADO - Ahora puedes gestionar algoritmos";
/// Fallback when a login is rejected without a usable detail.
pub const LOGIN_REJECTED: &str = "Credenciales incorrectas";
/// Toast shown after logout.
pub const LOGGED_OUT: &str = "🔒 Modo edición DESACTIVADO";
/// Toast shown when a persisted session is confirmed by the backend.
pub const SESSION_RESTORED: &str = "🔓 Sesión restaurada - Modo edición activo";

/// Open the login modal.
pub fn open_login(store: &mut AppStore) {
    store.overlays.login_open = true;
}

/// Close the login modal unless a request is in flight.
pub fn close_login(store: &mut AppStore) {
    if !store.overlays.login_busy {
        store.overlays.login_open = false;
    }
}

/// Mark a login request as started; returns `false` when one is already running.
pub fn begin_login(store: &mut AppStore) -> bool {
    if store.overlays.login_busy {
        return false;
    }
    store.overlays.login_busy = true;
    true
}

/// Apply a login outcome. Returns `true` when the session marker should be
/// persisted and the catalog refreshed.
pub fn apply_login_result(
    store: &mut AppStore,
    result: Result<LoginResponse, ClientError>,
) -> bool {
    store.overlays.login_busy = false;
    match result {
        Ok(response) => {
            store.session = SessionState::signed_in(response.user.username);
            store.overlays.login_open = false;
            notify(store, LOGIN_SUCCEEDED, ToastKind::Success);
            true
        }
        Err(err) => {
            notify(store, err.to_string(), ToastKind::Error);
            false
        }
    }
}

/// Clear the session and announce it. The caller clears the marker and reloads the catalog.
pub fn apply_logout(store: &mut AppStore) {
    store.session = SessionState::default();
    store.editor = None;
    store.confirm = None;
    notify(store, LOGGED_OUT, ToastKind::Info);
}

/// Apply the `/auth/check` outcome. Failures are left to the caller to log.
/// Returns whether the session was restored.
pub fn apply_session_check(
    store: &mut AppStore,
    result: &Result<SessionCheck, ClientError>,
) -> bool {
    match result {
        Ok(check) if check.authenticated => {
            store.session = SessionState::restored();
            notify(store, SESSION_RESTORED, ToastKind::Success);
            true
        }
        _ => false,
    }
}
