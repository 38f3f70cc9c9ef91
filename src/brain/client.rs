// Brain client - HTTP communication with the Gemini backend

use super::{
    BrainConfig, BrainError, BrainInitError, CompletionClient, GenerateContentRequest,
    GenerateContentResponse, RequestBuilder,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Brain client for LLM completion
#[derive(Clone)]
pub struct Brain {
    config: BrainConfig,
    client: Client,
}

impl Brain {
    /// Create a new Brain instance
    pub fn new(config: BrainConfig) -> Result<Self, BrainInitError> {
        info!(
            endpoint = %config.endpoint,
            model = %config.model,
            timeout_secs = ?config.request_timeout_secs,
            "initializing brain"
        );

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(BrainInitError::ClientError)?;

        info!("brain initialized successfully");
        Ok(Self { config, client })
    }

    /// Build the single-turn request for a prompt
    pub fn build_request(&self, prompt: &str) -> Result<GenerateContentRequest, BrainError> {
        let mut builder = RequestBuilder::new().user_text(prompt);

        if let Some(system) = &self.config.system_prompt {
            builder = builder.system(system.clone());
        }
        if let Some(max) = self.config.max_output_tokens {
            builder = builder.max_output_tokens(max);
        }
        if let Some(temp) = self.config.temperature {
            builder = builder.temperature(temp);
        }
        if let Some(tp) = self.config.top_p {
            builder = builder.top_p(tp);
        }
        if let Some(tk) = self.config.top_k {
            builder = builder.top_k(tk);
        }

        builder.build().map_err(BrainError::RequestBuild)
    }

    /// Perform one completion, no retries
    pub async fn infer(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BrainError> {
        info!(
            model = %self.config.model,
            contents_count = request.contents.len(),
            has_system = request.system_instruction.is_some(),
            "starting inference"
        );

        let start = Instant::now();
        match self.send_request(request).await {
            Ok(response) => {
                let (prompt_tokens, output_tokens) = response
                    .usage_metadata
                    .as_ref()
                    .map(|u| (u.prompt_token_count, u.candidates_token_count))
                    .unwrap_or((0, 0));

                info!(
                    model_version = ?response.model_version,
                    prompt_tokens = prompt_tokens,
                    output_tokens = output_tokens,
                    latency_ms = start.elapsed().as_millis() as u64,
                    candidates = response.candidates.len(),
                    finish_reason = ?response.finish_reason(),
                    status = "success",
                    "inference completed successfully"
                );
                Ok(response)
            }
            Err(e) => {
                error!(
                    latency_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "inference failed"
                );
                Err(e)
            }
        }
    }

    async fn send_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BrainError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        debug!(url = %url, "sending HTTP request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received HTTP response");

        if status.is_success() {
            let body = response.text().await?;
            let body_preview: String = body.chars().take(200).collect();
            debug!(response_preview = %body_preview, "response body received");

            let response: GenerateContentResponse = serde_json::from_str(&body)?;
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BrainError::AuthenticationFailed(body)
            }
            StatusCode::BAD_REQUEST => BrainError::InvalidRequest(body),
            StatusCode::TOO_MANY_REQUESTS => BrainError::QuotaExceeded(body),
            s if s.is_server_error() => BrainError::ModelError(body),
            s => BrainError::InvalidRequest(format!("HTTP {}: {}", s, body)),
        })
    }
}

#[async_trait]
impl CompletionClient for Brain {
    type Response = GenerateContentResponse;

    async fn generate_content(&self, prompt: &str) -> Result<Self::Response, BrainError> {
        let request = self.build_request(prompt)?;
        self.infer(&request).await
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
