//! Axum route handler for the upload-and-extract endpoint.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::{extract_file, FileKind};

/// Upload cap applied to the /extract route.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
}

/// POST /extract: multipart form with a single `file` part.
///
/// The extension allow-list runs before the file bytes are read, so an
/// unsupported upload is rejected without buffering it. Parsing happens on
/// the blocking pool; the parsers are synchronous.
pub async fn handle_extract(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|_| AppError::Validation("No file part in request".to_string()))?;

    // A Field borrows the multipart stream, so the matched part is reduced to
    // owned data here, before the stream is advanced again.
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        // Only parts carrying a filename count as file uploads.
        if field.name() != Some("file") || field.file_name().is_none() {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(AppError::Validation("No selected file".to_string())),
        };

        FileKind::from_name(&file_name)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        upload = Some((file_name, data));
        break;
    }

    let Some((file_name, data)) = upload else {
        return Err(AppError::Validation("No file part in request".to_string()));
    };

    let text = tokio::task::spawn_blocking(move || extract_file(&data, &file_name))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })??;

    Ok(Json(ExtractResponse {
        success: true,
        text,
    }))
}
