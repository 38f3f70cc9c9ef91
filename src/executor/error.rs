// Error types for Executor module

use thiserror::Error;

/// Executor error types
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Failed to spawn shell '{shell}': {source}")]
    SpawnFailed {
        shell: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
