// Model query executor - one prompt in, one string out

use crate::agent::fallback::{API_FAILURE, NO_QUERY};
use crate::brain::{CompletionClient, CompletionText};
use std::time::Instant;
use tracing::{debug, error, info};

/// Sends a single query to a completion client and returns the answer text.
///
/// Errors never reach the caller: an empty query yields [`NO_QUERY`] without
/// touching the client, and any client failure yields [`API_FAILURE`].
/// One attempt per call, no retries.
pub struct ModelQueryExecutor<C> {
    client: C,
}

impl<C: CompletionClient> ModelQueryExecutor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ask the model; `None` is treated like an empty query
    pub async fn ask(&self, query: Option<&str>) -> String {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => {
                debug!("rejecting empty query");
                return NO_QUERY.to_string();
            }
        };

        info!(model = %self.client.model(), query = %query, "sending query to model");
        let start = Instant::now();

        let result = self.client.generate_content(query).await;

        match result.and_then(|response| response.text()) {
            Ok(text) => {
                info!(
                    latency_ms = start.elapsed().as_millis() as u64,
                    response_chars = text.chars().count(),
                    "model query completed"
                );
                text
            }
            Err(e) => {
                error!(error = %e, "error while contacting the model API");
                API_FAILURE.to_string()
            }
        }
    }
}
