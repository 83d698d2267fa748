//! Axum route handlers for the generation endpoint.
//!
//! Two validation policies exist, one per deployment variant; both build the
//! detailed prompt and run the same generator. Responses always use the
//! `{success, content|error}` envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::builder::{build_detailed, GenerationRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub content: String,
}

/// POST /generate (combined variant)
///
/// Accepts any of the six request fields; at least one must be non-empty.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = body.map_err(|_| AppError::Validation("Missing JSON payload".to_string()))?;

    if request.is_empty() {
        return Err(AppError::Validation(
            "At least one input field must be provided.".to_string(),
        ));
    }

    run_generation(&state, &request).await
}

/// POST /generate (prompt-only variant)
///
/// `prompt` is the one required field; other supplied fields still flow
/// through the same detailed builder.
pub async fn handle_generate_prompt_only(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = body.map_err(|_| AppError::Validation("Missing JSON payload".to_string()))?;

    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing 'prompt' field in request".to_string(),
        ));
    }

    run_generation(&state, &request).await
}

async fn run_generation(
    state: &AppState,
    request: &GenerationRequest,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = build_detailed(request);
    let content = state.generator.generate(&prompt).await?;

    Ok(Json(GenerateResponse {
        success: true,
        content,
    }))
}
