use std::path::PathBuf;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("Invalid JSON")]
    InvalidJson(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    StorageUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            ApiError::InvalidJson(cause) => tracing::warn!("Rejected request body: {}", cause),
            _ if status.is_server_error() => tracing::error!("Error: {}: {}", status, self),
            _ => tracing::warn!("Error: {}: {}", status, self),
        }

        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
    }
}

/// Failures of the JSON file stores.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(_) => ApiError::StorageUnavailable(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
