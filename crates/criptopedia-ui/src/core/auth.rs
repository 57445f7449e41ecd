//! Session primitives shared across the UI.
//!
//! # Design
//! - The session flag only gates admin affordances; the backend authorizes every mutation.
//! - The persisted marker is opaque: its presence triggers a session check, nothing more.
//! - Storage access lives in the app shell so this module stays DOM-free.

/// Value written to local storage after a successful login.
pub const SESSION_MARKER_VALUE: &str = "authenticated";

/// Username assumed when a session is restored from the marker.
pub const RESTORED_USERNAME: &str = "admin";

/// Current admin session as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether admin affordances are visible.
    pub authenticated: bool,
    /// Username of the signed-in admin, when known.
    pub username: Option<String>,
}

impl SessionState {
    /// Session for a fresh login.
    #[must_use]
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
        }
    }

    /// Session restored from a persisted marker after a positive check.
    #[must_use]
    pub fn restored() -> Self {
        Self::signed_in(RESTORED_USERNAME)
    }

    /// Whether edit/delete controls should render.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.authenticated
    }
}

/// Whether a stored marker value should trigger a session check.
#[must_use]
pub fn has_session_marker(stored: Option<&str>) -> bool {
    stored.is_some_and(|value| !value.trim().is_empty())
}
