// Data types for Executor module

use std::fmt;

/// Returned when a command succeeds without writing to stdout
pub const NO_OUTPUT: &str = "Command executed successfully, but produced no output.";

/// Exit status POSIX shells use when a command cannot be found
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Outcome of one shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exit status zero; captured stdout, possibly empty
    Success(String),
    /// The process ran and exited non-zero (or was killed by a signal)
    CommandFailed {
        stderr: String,
        exit_code: Option<i32>,
    },
    /// The interpreter could not locate or start the program
    CommandNotFound(String),
}

impl CommandOutcome {
    /// Render as the single text result handed back to callers
    pub fn into_text(self) -> String {
        match self {
            CommandOutcome::Success(stdout) if !stdout.is_empty() => stdout,
            CommandOutcome::CommandFailed { stderr, .. } => stderr,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Success(stdout) if stdout.is_empty() => f.write_str(NO_OUTPUT),
            CommandOutcome::Success(stdout) => f.write_str(stdout),
            CommandOutcome::CommandFailed { stderr, .. } => f.write_str(stderr),
            CommandOutcome::CommandNotFound(command) => f.write_str(&not_found_message(command)),
        }
    }
}

fn not_found_message(command: &str) -> String {
    format!("Error: Command not found: '{}'", command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_text() {
        assert_eq!(CommandOutcome::Success("a\nb\n".into()).into_text(), "a\nb\n");
        assert_eq!(CommandOutcome::Success(String::new()).into_text(), NO_OUTPUT);
    }

    #[test]
    fn test_failed_text_is_stderr() {
        let outcome = CommandOutcome::CommandFailed {
            stderr: "ls: cannot access 'x': No such file or directory\n".into(),
            exit_code: Some(2),
        };
        assert_eq!(
            outcome.into_text(),
            "ls: cannot access 'x': No such file or directory\n"
        );
    }

    #[test]
    fn test_not_found_names_command() {
        let outcome = CommandOutcome::CommandNotFound("frobnicate --all".into());
        assert_eq!(outcome.to_string(), "Error: Command not found: 'frobnicate --all'");
        assert_eq!(outcome.to_string(), outcome.clone().into_text());
    }
}
