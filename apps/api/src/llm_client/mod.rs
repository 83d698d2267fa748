/// LLM client: the single point of entry for all completion-service calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion provider
/// directly. All LLM interactions MUST go through this module.
///
/// The wire protocol is the OpenAI-style chat-completions shape: a list of
/// role-tagged messages in, the first choice's text out. Handlers and the CLI
/// depend on the `CompletionBackend` trait rather than the HTTP client, so
/// tests can swap in a stub.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Sampling temperature applied to every completion call.
/// This is intentionally a constant; no other sampling parameter is exposed.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion returned no choices")]
    NoChoices,
}

/// Message role. The service only ever sends `system` and `user` messages;
/// at most one of each per call, system first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Consumes the response and returns the text of the first choice.
    /// A response with zero choices is a provider-side fault and is
    /// surfaced as an error, never as empty text.
    pub fn into_first_choice(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::NoChoices)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Pulls the human-readable message out of a provider error body, falling
/// back to the raw body when it is not the expected JSON shape.
fn provider_error_message(body: String) -> String {
    serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Everything the HTTP client needs to reach the completion service.
/// Built once from `Config` at startup and passed in explicitly; there is
/// no ambient global client state.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub base_url: String,
    pub api_key: String,
    pub deployment: String,
    pub temperature: f32,
}

/// The completion-service seam. `HttpCompletionClient` is the real
/// implementation; tests substitute a stub to assert call counts and
/// captured messages.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends the messages to the completion service and returns the text of
    /// the first returned choice.
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;
}

/// Reqwest-based client for the chat-completions endpoint.
///
/// No retries and no backoff: a failing upstream call surfaces immediately.
/// Timeout behavior comes from the underlying HTTP client alone.
#[derive(Clone)]
pub struct HttpCompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl HttpCompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            config,
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let request_body = ChatCompletionRequest {
            model: &self.config.deployment,
            messages,
            temperature: self.config.temperature,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: provider_error_message(body),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion.into_first_choice()
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::System).unwrap(), json!("system"));
        assert_eq!(serde_json::to_value(Role::User).unwrap(), json!("user"));
    }

    #[test]
    fn test_request_wire_shape() {
        let messages = vec![Message::user("Executive summary")];
        let request = ChatCompletionRequest {
            model: "gpt-test",
            messages: &messages,
            temperature: DEFAULT_TEMPERATURE,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], json!("gpt-test"));
        assert_eq!(
            value["messages"],
            json!([{"role": "user", "content": "Executive summary"}])
        );
        // f32 → f64 widening is not exact; compare with a tolerance.
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_first_choice_of_single() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "cmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hello client"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }))
        .unwrap();
        assert_eq!(response.into_first_choice().unwrap(), "Hello client");
    }

    #[test]
    fn test_first_choice_of_many_takes_first() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"content": "first"}},
                {"message": {"content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_first_choice().unwrap(), "first");
    }

    #[test]
    fn test_zero_choices_is_an_error() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(
            response.into_first_choice(),
            Err(CompletionError::NoChoices)
        ));
    }

    #[test]
    fn test_missing_usage_tolerated() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"content": "ok"}}]
        }))
        .unwrap();
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_provider_error_message_parsed() {
        let body = r#"{"error": {"message": "model not found", "type": "invalid_request_error"}}"#;
        assert_eq!(provider_error_message(body.to_string()), "model not found");
    }

    #[test]
    fn test_provider_error_message_falls_back_to_raw_body() {
        let body = "upstream gateway timeout";
        assert_eq!(provider_error_message(body.to_string()), body);
    }

    #[test]
    fn test_message_constructors() {
        let system = Message::system("persona");
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, "persona");

        let user = Message::user("request");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "request");
    }
}
