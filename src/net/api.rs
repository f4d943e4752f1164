//! REST API client for the clinic backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`], which keeps
//! the session and page logic testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>`. Non-2xx responses carry the status and
//! the server's `message` field when the body has one, so forms can show it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AttendanceRecord, Credentials, Identity, LoginResponse, NewAttendance, NewPatient, Patient, RegisterRequest,
};
use crate::config::ClientConfig;
use crate::state::session::IdentityApi;

pub const CURRENT_USER_PATH: &str = "/api/auth/user";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PATIENTS_PATH: &str = "/api/patients";
pub const ATTENDANCE_PATH: &str = "/api/attendance";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// HTTP client bound to one API origin.
///
/// Clones share the attached bearer token, so the session store and the
/// screens always send the same `Authorization` header.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Arc<str>,
    bearer: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: Arc::from(config.api_base_url.as_str()), bearer: Arc::new(RwLock::new(None)) }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach (`Some`) or remove (`None`) the bearer token on later requests.
    pub fn set_bearer(&self, token: Option<&str>) {
        let mut bearer = self.bearer.write().unwrap_or_else(PoisonError::into_inner);
        *bearer = token.map(str::to_owned);
    }

    pub fn authorization_header(&self) -> Option<String> {
        let bearer = self.bearer.read().unwrap_or_else(PoisonError::into_inner);
        bearer.as_deref().map(bearer_header)
    }

    /// Fetch the identity behind the attached token via `GET /api/auth/user`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx response.
    pub async fn current_user(&self) -> Result<Identity, ApiError> {
        self.get_json(CURRENT_USER_PATH).await
    }

    /// Exchange credentials for a token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the server's status and message on rejected credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = self.send_json(Method::Post, LOGIN_PATH, Some(credentials)).await?;
        decode_body(&body)
    }

    /// Create an account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the server's status and message when registration is refused.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, REGISTER_PATH, Some(request)).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Any transport failure, non-2xx response, or malformed list.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get_json(PATIENTS_PATH).await
    }

    /// # Errors
    ///
    /// Returns the server's status and message when the record is rejected.
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<(), ApiError> {
        self.send_json(Method::Post, PATIENTS_PATH, Some(patient)).await.map(|_| ())
    }

    /// # Errors
    ///
    /// Any transport failure, non-2xx response, or malformed list.
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(ATTENDANCE_PATH).await
    }

    /// # Errors
    ///
    /// Returns the server's status and message when the record is rejected.
    pub async fn create_attendance(&self, record: &NewAttendance) -> Result<(), ApiError> {
        self.send_json(Method::Post, ATTENDANCE_PATH, Some(record)).await.map(|_| ())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send_json::<()>(Method::Get, path, None).await?;
        decode_body(&body)
    }

    /// Send a request and return the raw response body of a 2xx response.
    async fn send_json<B: Serialize>(&self, method: Method, path: &str, payload: Option<&B>) -> Result<String, ApiError> {
        let payload = payload
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        #[cfg(feature = "csr")]
        {
            let url = self.endpoint(path);
            let mut builder = match method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            };
            if let Some(header) = self.authorization_header() {
                builder = builder.header("Authorization", &header);
            }
            let request = match payload {
                Some(json) => builder.header("Content-Type", "application/json").body(json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, payload);
            Err(ApiError::Unavailable)
        }
    }
}

impl IdentityApi for ApiClient {
    fn authorize(&self, token: Option<&str>) {
        self.set_bearer(token);
    }

    fn fetch_identity(&self) -> impl Future<Output = Result<Identity, ApiError>> {
        self.current_user()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a status error, lifting `{"message": ...}` out of the body if present.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned));
    ApiError::Status { status, message }
}
