use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use telegram::TelegramError;
use thiserror::Error;

use crate::models::ApiStatus;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Missing credential or required field, detected before any upstream call
    #[error("{0}")]
    BadRequest(String),

    /// Upstream call failed or returned something other than JSON
    #[error("Internal server error: {0}")]
    Upstream(#[from] TelegramError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ApiStatus::failure(self.to_string()))).into_response()
    }
}

/// Convenience alias
pub type ProxyResult<T> = Result<T, ProxyError>;

impl ProxyError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

/// Failures while wiring the shared HTTP client at startup
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),
}
