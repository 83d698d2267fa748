use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every response body is the uniform envelope `{"success": false, "error": <message>}`;
/// the message is the error's `Display` string, so handler code and the CLI print
/// the same text the API returns.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Error generating content: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::UnsupportedFileType => StatusCode::BAD_REQUEST,
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
