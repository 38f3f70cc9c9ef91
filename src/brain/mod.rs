// Brain module - LLM completion client

pub mod builder;
pub mod client;
pub mod completion;
pub mod error;
pub mod types;

pub use builder::RequestBuilder;
pub use client::Brain;
pub use completion::{CompletionClient, CompletionText};
pub use error::{BrainError, BrainInitError};
pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Role,
};

use tracing::warn;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Brain configuration
#[derive(Debug, Clone)]
pub struct BrainConfig {
    /// Inference backend URL
    pub endpoint: String,
    /// API key for authentication
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// HTTP client timeout in seconds (None = wait for the response)
    pub request_timeout_secs: Option<u64>,
    /// Maximum output tokens (None = use model default)
    pub max_output_tokens: Option<u32>,
    /// Temperature (0.0-2.0, None = use model default)
    pub temperature: Option<f32>,
    /// Top-P nucleus sampling (0.0-1.0, None = use model default)
    pub top_p: Option<f32>,
    /// Top-K sampling (None = use model default)
    pub top_k: Option<u32>,
    /// System instruction sent with every prompt
    pub system_prompt: Option<String>,
}

impl BrainConfig {
    /// Config with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: None,
            max_output_tokens: None,
            temperature: None,
            top_p: None,
            top_k: None,
            system_prompt: None,
        }
    }

    /// Load from `.env` and the process environment
    pub fn from_env() -> Result<Self, BrainInitError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BrainInitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| BrainInitError::ConfigMissing("GEMINI_API_KEY".into()))?;

        let mut config = Self::new(api_key);

        if let Some(endpoint) = lookup("GEMINI_ENDPOINT") {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(BrainInitError::ConfigInvalid(format!(
                    "GEMINI_ENDPOINT must be an http(s) URL, got '{}'",
                    endpoint
                )));
            }
            config.endpoint = endpoint;
        }
        if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.is_empty()) {
            config.model = model;
        }

        config.request_timeout_secs = parse_var(&lookup, "GEMINI_TIMEOUT_SECS", None);

        // Inference parameters (optional, use model defaults if not set)
        config.max_output_tokens = parse_var(&lookup, "GEMINI_MAX_TOKENS", None);
        config.temperature = parse_var(&lookup, "GEMINI_TEMPERATURE", None);
        config.top_p = parse_var(&lookup, "GEMINI_TOP_P", None);
        config.top_k = parse_var(&lookup, "GEMINI_TOP_K", None);
        config.system_prompt = lookup("GEMINI_SYSTEM_PROMPT").filter(|s| !s.is_empty());

        Ok(config)
    }
}

/// Parse a variable, logging a warning if the value is present but invalid.
fn parse_var<F, T>(lookup: &F, name: &str, default: Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(v) => match v.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        None => default,
    }
}
