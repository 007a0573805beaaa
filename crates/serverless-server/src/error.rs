//! Error types for the message service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serverless_types::ErrorResponse;
use thiserror::Error;

/// Why the bootstrapper fell back to volatile storage.
///
/// Never surfaced to HTTP callers; only logged at startup.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("DATABASE_URL not found")]
    ConfigMissing,

    #[error("No database driver for URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Errors raised by the storage facade.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Message is required")]
    Validation,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-request failure, rendered as `{"error": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Storage(StorageError::Validation) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Storage(StorageError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
