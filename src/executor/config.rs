// Executor configuration

/// Executor configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Shell path for command execution
    pub shell: String,
    /// Flag that makes the shell read the command from its next argument
    pub shell_flag: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            shell: String::from("/bin/sh"),
            shell_flag: String::from("-c"),
        }
    }
}
