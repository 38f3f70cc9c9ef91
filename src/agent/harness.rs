// Harness - drives the two executors one after the other

use crate::agent::ModelQueryExecutor;
use crate::brain::CompletionClient;
use crate::executor::ShellCommandExecutor;
use tracing::debug;

/// Owns one model executor and one shell executor
pub struct Harness<C> {
    query: ModelQueryExecutor<C>,
    shell: ShellCommandExecutor,
}

impl<C: CompletionClient> Harness<C> {
    pub fn new(client: C, shell: ShellCommandExecutor) -> Self {
        Self {
            query: ModelQueryExecutor::new(client),
            shell,
        }
    }

    pub async fn ask(&self, query: Option<&str>) -> String {
        debug!("dispatching to model query executor");
        self.query.ask(query).await
    }

    pub async fn run(&self, command: &str) -> String {
        debug!("dispatching to shell command executor");
        self.shell.run(command).await
    }
}
