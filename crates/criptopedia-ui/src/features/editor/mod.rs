//! Record editor feature wiring (add, edit, delete confirmation).
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to the shared API record only on submit, after required-field checks.
//! - The modal stays open until the gateway confirms the mutation.

pub mod reducers;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
