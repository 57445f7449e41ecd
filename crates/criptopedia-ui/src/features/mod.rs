//! Feature slices: catalog grid, admin session, record editor, video search.

pub mod catalog;
pub mod editor;
pub mod session;
pub mod videos;
