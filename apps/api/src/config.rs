use anyhow::{bail, Context, Result};

use crate::llm_client::{CompletionConfig, DEFAULT_TEMPERATURE};

/// Which endpoint surface and generate-validation policy a deployment runs.
/// The two policies come from the two historical API variants and are kept
/// as alternative startup configurations rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVariant {
    /// /health + /extract + /generate; /generate accepts any non-empty field.
    Combined,
    /// /health + /generate only; /generate requires a non-empty `prompt`.
    PromptOnly,
}

impl ApiVariant {
    fn from_env() -> Result<Self> {
        match std::env::var("API_VARIANT") {
            Err(_) => Ok(ApiVariant::Combined),
            Ok(value) => match value.as_str() {
                "combined" => Ok(ApiVariant::Combined),
                "prompt_only" => Ok(ApiVariant::PromptOnly),
                other => bail!("Unknown API_VARIANT '{other}' (expected 'combined' or 'prompt_only')"),
            },
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion_base_url: String,
    pub completion_api_key: String,
    pub deployment_name: String,
    /// Fixed sampling temperature; deliberately not env-configurable.
    pub temperature: f32,
    pub port: u16,
    pub rust_log: String,
    pub variant: ApiVariant,
    /// Static project-update file read by the interactive CLI at startup.
    pub project_data_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            completion_base_url: std::env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            completion_api_key: require_env("COMPLETION_API_KEY")?,
            deployment_name: require_env("DEPLOYMENT_NAME")?,
            temperature: DEFAULT_TEMPERATURE,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            variant: ApiVariant::from_env()?,
            project_data_path: std::env::var("PROJECT_DATA_PATH")
                .unwrap_or_else(|_| "data/project_data.json".to_string()),
        })
    }

    /// The subset of configuration the completion client needs, passed
    /// explicitly into `HttpCompletionClient::new` at startup.
    pub fn completion(&self) -> CompletionConfig {
        CompletionConfig {
            base_url: self.completion_base_url.clone(),
            api_key: self.completion_api_key.clone(),
            deployment: self.deployment_name.clone(),
            temperature: self.temperature,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
