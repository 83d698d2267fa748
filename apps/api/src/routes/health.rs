use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe; the body is exactly `{"status": "ok"}`.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
