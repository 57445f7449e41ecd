//! Client error taxonomy.
//!
//! # Design
//! - `Display` strings are the user-facing messages; toasts render them as-is.
//! - Transport detail stays in the variant payload for console logging.

use crate::models::{ErrorBody, MutationResponse};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Required-field and selection failures raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required form fields are blank.
    #[error("Por favor completa los campos obligatorios (*): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// No algorithm was chosen in the search select.
    #[error("Por favor selecciona un algoritmo")]
    SelectionMissing,
    /// The custom search option was chosen with a blank text field.
    #[error("Por favor escribe un algoritmo")]
    CustomTextMissing,
}

/// Failure surfaced by a gateway call or a local lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Request never completed.
    #[error("Error de conexión con el servidor")]
    Network(String),
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the body `detail`, or the operation fallback.
        message: String,
    },
    /// Success status with a body that did not match the expected shape.
    #[error("Respuesta inesperada del servidor")]
    Decode(String),
    /// Input rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Record missing from the current catalog snapshot.
    #[error("Algoritmo no encontrado")]
    NotFoundLocal {
        /// Identifier that was looked up.
        id: String,
    },
}

impl ClientError {
    /// Build a server failure from a raw error body, falling back to `fallback`
    /// when the body carries no usable `detail`.
    #[must_use]
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message())
            .unwrap_or_else(|| fallback.to_string());
        Self::Server { status, message }
    }

    /// Detail line for console logging.
    #[must_use]
    pub fn log_detail(&self) -> String {
        match self {
            Self::Network(detail) => format!("network: {detail}"),
            Self::Server { status, message } => format!("http {status}: {message}"),
            Self::Decode(detail) => format!("decode: {detail}"),
            Self::Validation(err) => format!("validation: {err}"),
            Self::NotFoundLocal { id } => format!("not found locally: {id}"),
        }
    }
}

/// Turn a completed HTTP exchange into a typed result.
///
/// # Errors
///
/// Non-2xx statuses become [`ClientError::Server`] (message from `detail`, else
/// `fallback`); a 2xx body that does not decode becomes [`ClientError::Decode`].
pub fn decode_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        return Err(ClientError::from_error_body(status, body, fallback));
    }
    serde_json::from_str(body).map_err(|err| ClientError::Decode(err.to_string()))
}

/// Decode an admin mutation reply. The status alone decides success: any
/// 2xx body (a stored record, a confirmation, or nothing) is accepted.
///
/// # Errors
///
/// Non-2xx statuses become [`ClientError::Server`].
pub fn decode_mutation_body(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<MutationResponse, ClientError> {
    match decode_body(status, body, fallback) {
        Err(ClientError::Decode(_)) => Ok(MutationResponse::default()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionCheck;

    #[test]
    fn decode_body_maps_status_and_shape() {
        let ok: Result<SessionCheck, _> = decode_body(200, r#"{"authenticated":true}"#, "x");
        assert_eq!(ok, Ok(SessionCheck { authenticated: true }));

        let bad_shape: Result<Vec<SessionCheck>, _> = decode_body(200, "{}", "x");
        assert!(matches!(bad_shape, Err(ClientError::Decode(_))));

        let rejected: Result<SessionCheck, _> =
            decode_body(422, r#"{"detail":[{"msg":"field required"}]}"#, "x");
        assert_eq!(
            rejected,
            Err(ClientError::Server {
                status: 422,
                message: "field required".to_string()
            })
        );
    }

    #[test]
    fn server_error_prefers_body_detail() {
        let err = ClientError::from_error_body(401, r#"{"detail":"bad credentials"}"#, "fallback");
        assert_eq!(err.to_string(), "bad credentials");
        assert_eq!(
            err,
            ClientError::Server {
                status: 401,
                message: "bad credentials".to_string()
            }
        );
    }

    #[test]
    fn server_error_falls_back_on_unparseable_body() {
        let err = ClientError::from_error_body(500, "<html>oops</html>", "Error del servidor");
        assert_eq!(err.to_string(), "Error del servidor");
        let empty = ClientError::from_error_body(404, "{}", "Error eliminando algoritmo");
        assert_eq!(empty.to_string(), "Error eliminando algoritmo");
    }

    #[test]
    fn validation_lists_missing_fields() {
        let err = ClientError::from(ValidationError::MissingFields(vec!["Nombre", "ID"]));
        assert_eq!(
            err.to_string(),
            "Por favor completa los campos obligatorios (*): Nombre, ID"
        );
    }

    #[test]
    fn network_errors_hide_transport_detail() {
        let err = ClientError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Error de conexión con el servidor");
        assert!(err.log_detail().contains("Failed to fetch"));
    }

    #[test]
    fn mutation_replies_succeed_on_status_alone() {
        assert_eq!(
            decode_mutation_body(204, "", "Error eliminando algoritmo"),
            Ok(MutationResponse::default())
        );
        let confirmed = decode_mutation_body(200, r#"{"message":"ok"}"#, "fallback");
        assert_eq!(
            confirmed.map(|reply| reply.message),
            Ok(Some("ok".to_string()))
        );
        let rejected = decode_mutation_body(403, r#"{"detail":"No autorizado"}"#, "fallback");
        assert_eq!(
            rejected,
            Err(ClientError::Server {
                status: 403,
                message: "No autorizado".to_string()
            })
        );
    }
}
