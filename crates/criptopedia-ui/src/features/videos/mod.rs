//! Video search feature wiring.
//!
//! # Design
//! - Selection resolution and result panels are pure so they test natively.
//! - Each search replaces the panel; responses apply in arrival order.

pub mod reducers;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
