//! API base URL resolution.
//!
//! # Design
//! - Local development hosts talk to a backend on port 8000; everything else uses the hosted API.
//! - A stored override wins when it is non-blank, so staging backends need no rebuild.

/// Backend used when the page is served from a development host.
pub const LOCAL_API_BASE: &str = "http://localhost:8000";
/// Hosted backend used everywhere else.
pub const REMOTE_API_BASE: &str = "https://criptopedia-backend.onrender.com";

/// Whether the page hostname is a local development host.
#[must_use]
pub fn is_local_host(hostname: &str) -> bool {
    matches!(hostname.trim(), "localhost" | "127.0.0.1")
}

/// Default API base for a page hostname.
#[must_use]
pub fn api_base_for_host(hostname: &str) -> &'static str {
    if is_local_host(hostname) {
        LOCAL_API_BASE
    } else {
        REMOTE_API_BASE
    }
}

/// Resolve the API base from the hostname and an optional stored override.
#[must_use]
pub fn resolve_api_base(hostname: &str, override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| api_base_for_host(hostname))
        .trim_end_matches('/')
        .to_string()
}
