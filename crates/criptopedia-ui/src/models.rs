//! UI-side models plus re-exports of the shared API DTOs.

pub use criptopedia_api_models::{
    AdminUser, AlgorithmRecord, Category, Difficulty, ErrorBody, KeyType, LoginRequest,
    LoginResponse, MutationResponse, SessionCheck, VideoResult, VideoSearchRequest,
    VideoSearchResponse,
};

/// Toast severity variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Successful operation.
    Success,
    /// Failed operation.
    Error,
    /// Non-fatal condition the user should notice.
    Warning,
    /// Informational toast.
    Info,
}

impl ToastKind {
    /// CSS modifier used by the toast host.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}
