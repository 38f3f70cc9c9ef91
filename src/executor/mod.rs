// Executor module - runs shell commands on the host

pub mod config;
pub mod error;
pub mod shell;
pub mod types;

pub use config::ExecutorConfig;
pub use error::{ExecutorError, Result};
pub use shell::ShellCommandExecutor;
#[allow(unused_imports)]
pub use types::{CommandOutcome, NO_OUTPUT};
