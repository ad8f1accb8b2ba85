//! Error types for the procedure API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Team not found: {0}")]
    TeamNotFound(i32),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Completion service error: {0}")]
    Completion(#[from] llm_bridge::LlmError),

    #[error("Document engine error: {0}")]
    Engine(#[from] procedure_engine::EngineError),

    #[error("Storage error: {0}")]
    Storage(#[from] procedure_storage::StorageError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::TeamNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Team not found: {}", id))
            }
            ApiError::DocumentNotFound(_) => {
                (StatusCode::NOT_FOUND, "File not found".to_string())
            }
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Completion(e) => {
                tracing::error!("Completion service error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to generate document".to_string(),
                )
            }
            ApiError::Engine(e) => {
                tracing::error!("Document engine error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate document".to_string(),
                )
            }
            ApiError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
