//! Transient notification queue.
//!
//! # Design
//! - Ids are monotonic per app boot so the host can key timers on them.
//! - Expiry is driven by the toast host; this queue only tracks what is visible.

use crate::models::{Toast, ToastKind};

/// How long a toast stays visible before it is dismissed automatically.
pub const NOTIFICATION_TTL_MS: u32 = 4_000;

/// Stack of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Toast>,
}

impl Notifications {
    /// Push a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a toast; returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Most recently pushed toast still visible.
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }
}
