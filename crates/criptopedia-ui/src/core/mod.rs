//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod config;
pub mod error;
pub mod logic;
pub mod notify;
pub mod store;
