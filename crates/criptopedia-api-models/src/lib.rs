#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Criptopedia catalog API.
//!
//! The backend stores catalog labels (category, difficulty, key type) as
//! free-form Spanish strings. The enums below keep the known labels typed
//! while preserving anything else verbatim through an `Other` variant, so a
//! single unexpected label never makes the whole catalog undecodable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Base URL used to build watch links for video results.
pub const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

macro_rules! wire_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Label outside the known set, preserved verbatim.
            Other(String),
        }

        impl $name {
            /// Known labels in the order the admin forms offer them.
            #[must_use]
            pub fn known() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// Wire label sent to and received from the API.
            #[must_use]
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Parse a wire label, keeping unknown values as [`Self::Other`].
            #[must_use]
            pub fn from_label(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($label => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $label.to_string(),)+
                    $name::Other(value) => value,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

wire_label_enum! {
    /// Catalog grouping for an algorithm.
    Category {
        /// Classical (pre-computer) ciphers.
        ClassicalCrypto => "Criptografía Clásica",
        /// Modern symmetric cryptography.
        ModernCrypto => "Criptografía Moderna",
        /// Public-key cryptography.
        AsymmetricCrypto => "Criptografía Asimétrica",
        /// Encodings such as Base64.
        Encoding => "Codificación",
        /// Hash functions.
        HashFunction => "Funciones Hash",
    }
}

wire_label_enum! {
    /// Learning difficulty attached to an algorithm.
    Difficulty {
        /// Introductory material.
        Beginner => "Principiante",
        /// Requires some background.
        Intermediate => "Intermedio",
        /// Requires solid mathematical background.
        Advanced => "Avanzado",
    }
}

wire_label_enum! {
    /// Kind of key an algorithm operates with.
    KeyType {
        /// Shared secret key.
        Symmetric => "Clave simétrica",
        /// Public/private key.
        Asymmetric => "Clave asimétrica",
        /// Keyword (e.g. Vigenère).
        Keyword => "Palabra clave",
        /// Integer shift (e.g. Caesar).
        Integer => "Número entero",
        /// Generated key pair.
        KeyPair => "Par de claves",
        /// Keyless transforms such as encodings.
        NotApplicable => "No aplica",
    }
}

/// One catalog entry describing a cryptography or encoding algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmRecord {
    /// Unique slug identifying the entry.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog grouping.
    pub category: Category,
    /// Short explanation of how the algorithm works.
    pub description: String,
    /// Worked encryption example.
    pub encryption_example: String,
    /// Worked decryption example.
    pub decryption_example: String,
    /// Kind of key the algorithm uses.
    pub key_type: KeyType,
    /// Learning difficulty.
    pub difficulty: Difficulty,
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// User descriptor returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Authenticated username.
    pub username: String,
}

/// Response body of a successful `/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Success flag, when the backend sends one. A 2xx status already
    /// means the credentials were accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Logged-in user.
    pub user: AdminUser,
}

/// Response body of `/auth/check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCheck {
    /// Whether the backend considers the caller authenticated.
    #[serde(default)]
    pub authenticated: bool,
}

/// Body posted to `/videos/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSearchRequest {
    /// Catalog id or free-text algorithm name.
    pub algorithm: String,
}

/// One video returned by the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    /// Provider video identifier.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Channel name.
    pub channel: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Query that produced this result, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Result came from a live provider lookup.
    #[serde(default)]
    pub api_real: bool,
    /// Result is a canned fallback used when the lookup failed.
    #[serde(default)]
    pub fallback: bool,
}

impl VideoResult {
    /// Whether this entry is a confirmed live lookup.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        self.api_real
    }

    /// Whether this entry is a fallback; a real result is never a fallback.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback && !self.api_real
    }

    /// Public watch URL for the video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{YOUTUBE_WATCH_BASE}{}", self.video_id)
    }
}

/// Response body of `/videos/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSearchResponse {
    /// Backend status string (`success`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Echo of the requested identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Display name the backend resolved for the request.
    pub algorithm_name: String,
    /// Matching videos.
    #[serde(default)]
    pub videos: Vec<VideoResult>,
    /// Number of videos reported by the backend.
    #[serde(default)]
    pub total_results: usize,
    /// Label describing the search backend state.
    #[serde(default)]
    pub youtube_api: String,
}

/// Response body of the admin create/update/delete endpoints.
///
/// Every field is optional: a create may answer with the bare stored record
/// and a delete with a confirmation object. Success is decided by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MutationResponse {
    /// Success flag, when the backend sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Record as stored (or removed) by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<AlgorithmRecord>,
}

/// Error document returned with non-success statuses.
///
/// `detail` is a plain string for handled errors and a list of
/// `{loc, msg, type}` entries for request validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    /// Raw detail payload.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable message carried by the body, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let message = match self.detail.as_ref()? {
            Value::String(text) => text.trim().to_string(),
            Value::Array(entries) => entries
                .iter()
                .filter_map(entry_message)
                .collect::<Vec<_>>()
                .join("; "),
            entry @ Value::Object(_) => entry_message(entry).unwrap_or_default(),
            _ => String::new(),
        };
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

fn entry_message(entry: &Value) -> Option<String> {
    match entry {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => map
            .get("msg")
            .and_then(Value::as_str)
            .map(ToString::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_catalog_entry() {
        let raw = json!({
            "id": "cesar",
            "name": "Cifrado César",
            "category": "Criptografía Clásica",
            "description": "Cifrado por desplazamiento simple usado por Julio César.",
            "encryption_example": "HOLA → KROD (clave 3)",
            "decryption_example": "KROD → HOLA (clave 3)",
            "key_type": "Número entero",
            "difficulty": "Principiante"
        });
        let record: AlgorithmRecord = serde_json::from_value(raw).expect("record decodes");
        assert_eq!(record.category, Category::ClassicalCrypto);
        assert_eq!(record.key_type, KeyType::Integer);
        assert_eq!(record.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn unknown_labels_survive_a_round_trip() {
        let key_type = KeyType::from_label("Por definir");
        assert_eq!(key_type, KeyType::Other("Por definir".to_string()));
        let encoded = serde_json::to_value(&key_type).expect("encode");
        assert_eq!(encoded, json!("Por definir"));
        assert_eq!(Category::from_label("Codificación"), Category::Encoding);
    }

    #[test]
    fn known_lists_match_form_options() {
        assert_eq!(Category::known().len(), 5);
        assert_eq!(Difficulty::known().len(), 3);
        assert_eq!(KeyType::known().len(), 6);
        assert_eq!(KeyType::known()[5].label(), "No aplica");
    }

    #[test]
    fn error_body_reads_string_and_validation_details() {
        let plain: ErrorBody =
            serde_json::from_value(json!({"detail": "bad credentials"})).expect("decode");
        assert_eq!(plain.message().as_deref(), Some("bad credentials"));

        let validation: ErrorBody = serde_json::from_value(json!({
            "detail": [
                {"loc": ["body", "name"], "msg": "field required", "type": "value_error.missing"},
                {"loc": ["body", "id"], "msg": "field required", "type": "value_error.missing"}
            ]
        }))
        .expect("decode");
        assert_eq!(
            validation.message().as_deref(),
            Some("field required; field required")
        );

        let blank: ErrorBody = serde_json::from_value(json!({"detail": "  "})).expect("decode");
        assert_eq!(blank.message(), None);
        assert_eq!(ErrorBody::default().message(), None);
    }

    #[test]
    fn video_flags_default_and_build_watch_links() {
        let video: VideoResult = serde_json::from_value(json!({
            "title": "Introducción a ROT13 - Criptografía",
            "video_id": "sMOZf4GN3oc",
            "channel": "Criptopedia Universal",
            "thumbnail": "https://i.ytimg.com/vi/sMOZf4GN3oc/mqdefault.jpg",
            "search_term": "ROT13",
            "fallback": true
        }))
        .expect("decode");
        assert!(!video.is_real());
        assert!(video.is_fallback());
        assert_eq!(
            video.watch_url(),
            "https://www.youtube.com/watch?v=sMOZf4GN3oc"
        );
    }

    #[test]
    fn mutation_and_login_bodies_need_no_success_flag() {
        let created: MutationResponse = serde_json::from_value(json!({
            "id": "rot13",
            "name": "ROT13",
            "category": "Codificación"
        }))
        .expect("bare record decodes");
        assert_eq!(created, MutationResponse::default());

        let deleted: MutationResponse =
            serde_json::from_value(json!({"message": "ok"})).expect("confirmation decodes");
        assert_eq!(deleted.message.as_deref(), Some("ok"));
        assert_eq!(deleted.success, None);

        let login: LoginResponse =
            serde_json::from_value(json!({"user": {"username": "admin"}})).expect("decode");
        assert_eq!(login.user.username, "admin");
        assert_eq!(login.success, None);
    }

    #[test]
    fn search_response_tolerates_missing_videos() {
        let response: VideoSearchResponse = serde_json::from_value(json!({
            "algorithm_name": "ROT13",
            "total_results": 0,
            "youtube_api": "ACTIVA"
        }))
        .expect("decode");
        assert!(response.videos.is_empty());
        assert_eq!(response.status, None);
    }
}
