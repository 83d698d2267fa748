pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::config::ApiVariant;
use crate::extract::handlers::{handle_extract, MAX_UPLOAD_BYTES};
use crate::generation::handlers::{handle_generate, handle_generate_prompt_only};
use crate::state::AppState;

/// Builds the route surface for the configured deployment variant.
/// /health is always mounted; /extract exists only in the combined variant.
pub fn build_router(state: AppState) -> Router {
    let router = match state.config.variant {
        ApiVariant::Combined => Router::new()
            .route(
                "/extract",
                post(handle_extract).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
            )
            .route("/generate", post(handle_generate)),
        ApiVariant::PromptOnly => {
            Router::new().route("/generate", post(handle_generate_prompt_only))
        }
    };

    router
        .route("/health", get(health::health_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::ApiVariant;
    use crate::llm_client::test_support::StubBackend;
    use crate::state::test_support::test_state;

    use super::*;

    fn test_app(variant: ApiVariant) -> Router {
        let backend = Arc::new(StubBackend::replying("unused"));
        build_router(test_state(variant, backend))
    }

    async fn status_of(app: Router, method: Method, uri: &str) -> StatusCode {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health_mounted_on_both_variants() {
        for variant in [ApiVariant::Combined, ApiVariant::PromptOnly] {
            let app = test_app(variant);

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, serde_json::json!({"status": "ok"}));
        }
    }

    #[tokio::test]
    async fn test_prompt_only_variant_has_no_extract_route() {
        let app = test_app(ApiVariant::PromptOnly);
        let status = status_of(app, Method::POST, "/extract").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_combined_variant_mounts_extract_route() {
        let app = test_app(ApiVariant::Combined);
        // Not multipart, so the handler rejects it, but the route exists.
        let status = status_of(app, Method::POST, "/extract").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_mounted_on_both_variants() {
        for variant in [ApiVariant::Combined, ApiVariant::PromptOnly] {
            let app = test_app(variant);
            let status = status_of(app, Method::POST, "/generate").await;
            // Empty body is rejected by validation, never by routing.
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
}
