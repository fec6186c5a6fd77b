use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Text shown in place of the project table when a region load fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch projects. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Failure talking to the project service. Recovered at the fetcher boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Transport(String),
    Status(u16),
    Malformed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Project service request failed: {msg}"),
            FetchError::Status(code) => write!(f, "Project service returned HTTP {code}"),
            FetchError::Malformed(msg) => write!(f, "Malformed project service response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
