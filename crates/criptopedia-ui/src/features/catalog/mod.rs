//! Catalog grid feature wiring.
//!
//! # Design
//! - The snapshot is replaced wholesale on every refresh, never patched.
//! - Cards and select options are pure view models so they test without a document.

pub mod reducers;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
