//! Admin session feature wiring.
//!
//! # Design
//! - Login, logout, and restore are reducers over the shared store.
//! - Marker persistence is the caller's job; reducers report when it is needed.

pub mod reducers;
#[cfg(target_arch = "wasm32")]
pub mod view;
