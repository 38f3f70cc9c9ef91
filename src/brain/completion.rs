// Narrow completion interfaces - what the query path needs from a model client

use super::BrainError;
use async_trait::async_trait;

/// A provider response reduced to its plain text
pub trait CompletionText {
    fn text(&self) -> Result<String, BrainError>;
}

/// Single-turn completion client (implemented by Brain, and by mocks in tests)
#[async_trait]
pub trait CompletionClient: Send + Sync {
    type Response: CompletionText + Send;

    /// Submit one text prompt and wait for the structured response
    async fn generate_content(&self, prompt: &str) -> Result<Self::Response, BrainError>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}
