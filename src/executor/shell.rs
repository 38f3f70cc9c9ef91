// Shell command executor

use crate::executor::types::EXIT_COMMAND_NOT_FOUND;
use crate::executor::{CommandOutcome, ExecutorConfig, ExecutorError, Result};
use std::process::Output;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Runs one command string through the host shell and captures its output.
///
/// Nothing is shared between calls: each invocation spawns a fresh child,
/// waits for it to exit, and returns. There is no timeout and no output
/// limit, so a hung command blocks the caller.
pub struct ShellCommandExecutor {
    config: ExecutorConfig,
}

impl ShellCommandExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        debug!(shell = %config.shell, "initializing shell executor");
        Self { config }
    }

    /// Execute and return the text result. Never fails.
    pub async fn run(&self, command: &str) -> String {
        self.execute(command).await.into_text()
    }

    /// Execute and classify the result
    pub async fn execute(&self, command: &str) -> CommandOutcome {
        let start = Instant::now();
        debug!(command = %command, "executing shell command");

        let output = match self.spawn(command).await {
            Ok(output) => output,
            Err(e) => {
                warn!(command = %command, error = %e, "command could not be started");
                return CommandOutcome::CommandNotFound(command.to_string());
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        let outcome = classify(command, output);

        match &outcome {
            CommandOutcome::Success(stdout) => info!(
                command = %truncate(command),
                duration_ms = duration_ms,
                output_bytes = stdout.len(),
                "shell command executed"
            ),
            CommandOutcome::CommandFailed { stderr, exit_code } => warn!(
                command = %truncate(command),
                duration_ms = duration_ms,
                exit_code = ?exit_code,
                stderr = %stderr.trim_end(),
                "shell command failed"
            ),
            CommandOutcome::CommandNotFound(_) => debug!(
                command = %truncate(command),
                duration_ms = duration_ms,
                "shell command not found"
            ),
        }

        outcome
    }

    async fn spawn(&self, command: &str) -> Result<Output> {
        Command::new(&self.config.shell)
            .arg(&self.config.shell_flag)
            .arg(command)
            .output()
            .await
            .map_err(|source| ExecutorError::SpawnFailed {
                shell: self.config.shell.clone(),
                source,
            })
    }
}

impl Default for ShellCommandExecutor {
    fn default() -> Self {
        Self::new(ExecutorConfig::default())
    }
}

/// Map exit status and captured streams onto an outcome.
/// Stderr written by a successful command is discarded.
fn classify(command: &str, output: Output) -> CommandOutcome {
    if output.status.success() {
        return CommandOutcome::Success(String::from_utf8_lossy(&output.stdout).into_owned());
    }

    let exit_code = output.status.code();
    if exit_code == Some(EXIT_COMMAND_NOT_FOUND) {
        warn!(
            command = %truncate(command),
            stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
            "shell reported command not found"
        );
        return CommandOutcome::CommandNotFound(command.to_string());
    }

    CommandOutcome::CommandFailed {
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code,
    }
}

fn truncate(command: &str) -> String {
    command.chars().take(100).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_shell_is_not_found() {
        let executor = ShellCommandExecutor::new(ExecutorConfig {
            shell: "/nonexistent/shell-binary".to_string(),
            ..Default::default()
        });

        let outcome = executor.execute("echo hi").await;
        assert_eq!(outcome, CommandOutcome::CommandNotFound("echo hi".to_string()));
    }

    #[tokio::test]
    async fn test_exit_127_with_stderr_is_not_found() {
        let executor = ShellCommandExecutor::default();
        let command = "echo 'tool: license check failed' >&2; exit 127";

        let outcome = executor.execute(command).await;
        assert_eq!(outcome, CommandOutcome::CommandNotFound(command.to_string()));
        assert!(!outcome.into_text().contains("license check failed"));
    }
}
