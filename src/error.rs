//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `InvalidRepositoryFormat` → 400
//! - `RateLimited` → 403
//! - `RepositoryNotFound` → 404
//! - `UpstreamTimeout` → 408
//! - `Upstream` → the upstream's own status code
//! - `UpstreamUnreachable`, `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid repository format. Use the format: owner/repo-name")]
    InvalidRepositoryFormat,

    #[error("Repository not found. Check that the repository exists and is public.")]
    RepositoryNotFound,

    #[error("API rate limit reached. Try again later or configure a GitHub token.")]
    RateLimited,

    #[error("GitHub API error: {status}")]
    Upstream { status: u16 },

    #[error("Timed out while contacting GitHub. Try again later.")]
    UpstreamTimeout,

    #[error("Connection error: {0}")]
    UpstreamUnreachable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRepositoryFormat => StatusCode::BAD_REQUEST,
            AppError::RepositoryNotFound => StatusCode::NOT_FOUND,
            AppError::RateLimited => StatusCode::FORBIDDEN,
            // Forwarded verbatim; codes that are not valid HTTP statuses become 502
            AppError::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::UpstreamTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::UpstreamUnreachable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
