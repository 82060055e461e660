use crate::Cli;
use crate::CommandResult;

/// A sub-command of `gqlx`. The global [`Cli`] options (schema path, output
/// format) are handed to it by value once it has been selected.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
