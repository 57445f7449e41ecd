//! HTTP client helpers (REST).
//!
//! # Design
//! - One request per operation; no retries, no client-side timeouts.
//! - Every failure is a [`ClientError`] with an operation-specific fallback message.

use crate::core::error::{ClientError, decode_body, decode_mutation_body};
use crate::features::session::reducers::LOGIN_REJECTED;
use crate::models::{
    AlgorithmRecord, LoginRequest, LoginResponse, MutationResponse, SessionCheck,
    VideoSearchRequest, VideoSearchResponse,
};
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

const LIST_FAILED: &str = "Error cargando los algoritmos";
const CREATE_FAILED: &str = "Error creando algoritmo";
const UPDATE_FAILED: &str = "Error del servidor";
const DELETE_FAILED: &str = "Error eliminando algoritmo";
const CHECK_FAILED: &str = "No hay sesión activa";
const SEARCH_FAILED: &str = "Error en la búsqueda";

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn algorithm_path(id: &str) -> String {
        format!("/admin/algorithms/{}", urlencoding::encode(id))
    }

    async fn exchange(request: Request) -> Result<(u16, String), ClientError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok((status, body))
    }

    async fn send<T: DeserializeOwned>(request: Request, fallback: &str) -> Result<T, ClientError> {
        let (status, body) = Self::exchange(request).await?;
        decode_body(status, &body, fallback)
    }

    async fn send_mutation(
        request: Request,
        fallback: &str,
    ) -> Result<MutationResponse, ClientError> {
        let (status, body) = Self::exchange(request).await?;
        decode_mutation_body(status, &body, fallback)
    }

    fn with_json<B: Serialize>(request: Request, body: &B) -> Result<Request, ClientError> {
        request
            .json(body)
            .map_err(|err| ClientError::Decode(format!("request body: {err}")))
    }

    pub(crate) async fn list_algorithms(&self) -> Result<Vec<AlgorithmRecord>, ClientError> {
        Self::send(Request::get(&self.url("/algorithms")), LIST_FAILED).await
    }

    pub(crate) async fn create_algorithm(
        &self,
        record: &AlgorithmRecord,
    ) -> Result<MutationResponse, ClientError> {
        let request = Self::with_json(Request::post(&self.url("/admin/algorithms")), record)?;
        Self::send_mutation(request, CREATE_FAILED).await
    }

    pub(crate) async fn update_algorithm(
        &self,
        id: &str,
        record: &AlgorithmRecord,
    ) -> Result<MutationResponse, ClientError> {
        let request = Self::with_json(Request::put(&self.url(&Self::algorithm_path(id))), record)?;
        Self::send_mutation(request, UPDATE_FAILED).await
    }

    pub(crate) async fn delete_algorithm(&self, id: &str) -> Result<MutationResponse, ClientError> {
        Self::send_mutation(
            Request::delete(&self.url(&Self::algorithm_path(id))),
            DELETE_FAILED,
        )
        .await
    }

    pub(crate) async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, ClientError> {
        let request = Self::with_json(Request::post(&self.url("/auth/login")), credentials)?;
        Self::send(request, LOGIN_REJECTED).await
    }

    pub(crate) async fn check_session(&self) -> Result<SessionCheck, ClientError> {
        Self::send(Request::get(&self.url("/auth/check")), CHECK_FAILED).await
    }

    pub(crate) async fn search_videos(
        &self,
        algorithm: &str,
    ) -> Result<VideoSearchResponse, ClientError> {
        let body = VideoSearchRequest {
            algorithm: algorithm.to_string(),
        };
        let request = Self::with_json(Request::post(&self.url("/videos/search")), &body)?;
        Self::send(request, SEARCH_FAILED).await
    }
}
