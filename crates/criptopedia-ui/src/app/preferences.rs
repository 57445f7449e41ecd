//! Persistence and environment helpers for the app shell.

use crate::core::auth::SESSION_MARKER_VALUE;
use crate::core::config::resolve_api_base;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const SESSION_MARKER_KEY: &str = "criptopedia.auth_token";
pub(crate) const API_BASE_OVERRIDE_KEY: &str = "criptopedia.api_base_url";

pub(crate) fn load_session_marker() -> Option<String> {
    LocalStorage::get::<String>(SESSION_MARKER_KEY).ok()
}

pub(crate) fn persist_session_marker() {
    set_storage(SESSION_MARKER_KEY, SESSION_MARKER_VALUE);
}

pub(crate) fn clear_session_marker() {
    delete_storage(SESSION_MARKER_KEY);
}

/// Resolve the API base from the page hostname and the optional stored override.
///
/// The override is read raw so it can be set by hand from the dev tools.
pub(crate) fn api_base_url() -> String {
    let hostname = window().location().hostname().unwrap_or_default();
    let override_url = match LocalStorage::raw().get_item(API_BASE_OVERRIDE_KEY) {
        Ok(value) => value,
        Err(err) => {
            log_storage_error("get", API_BASE_OVERRIDE_KEY, &format!("{err:?}"));
            None
        }
    };
    resolve_api_base(&hostname, override_url.as_deref())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
