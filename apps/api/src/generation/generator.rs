//! Deliverable generation: validates a built prompt and runs the
//! completion call.
//!
//! Flow: BuiltPrompt → non-empty check → CompletionBackend → generated text.
//! The generator never builds prompts and never touches HTTP types; it is
//! the one place where completion failures become `AppError::Generation`.

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::generation::builder::BuiltPrompt;
use crate::llm_client::CompletionBackend;

/// Orchestrates a single generation call. Holds the completion backend
/// behind an `Arc` so cloning per request is cheap and tests can inject
/// a stub.
#[derive(Clone)]
pub struct DeliverableGenerator {
    backend: Arc<dyn CompletionBackend>,
}

impl DeliverableGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Generates deliverable text for a built prompt.
    ///
    /// An empty (after trimming) prompt fails fast with a validation error;
    /// the completion service is not called in that case. Any backend
    /// failure (network, provider error, zero choices) is wrapped into a
    /// single generation error with a readable message.
    pub async fn generate(&self, prompt: &BuiltPrompt) -> Result<String, AppError> {
        if prompt.user_content().trim().is_empty() {
            return Err(AppError::Validation("Prompt cannot be empty".to_string()));
        }

        let messages = prompt.messages();
        info!(
            "Requesting completion ({} message(s), {} prompt chars)",
            messages.len(),
            prompt.user_content().len()
        );

        self.backend
            .complete(&messages)
            .await
            .map_err(|e| AppError::Generation(e.to_string()))
    }
}
