use crate::Cli;
use crate::CommandResult;

/// A subcommand of `protoc-gen-graphql`. Each implementation reports its
/// outcome through the returned [`CommandResult`] rather than exiting.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
