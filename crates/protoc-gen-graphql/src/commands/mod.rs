mod generate;
mod plugin;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use plugin::PluginCmd;
pub(crate) use plugin::run_plugin;

#[derive(Debug, clap::Parser)]
#[command(name = "protoc-gen-graphql")]
pub(crate) enum CommandEnum {
    /// Generate GraphQL schema files from compiled descriptor sets
    /// (`protoc --include_imports -o <file>`).
    Generate(Box<GenerateCmd>),
    /// Run as a protoc plugin over stdin/stdout (the default).
    Plugin(Box<PluginCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Plugin(cmd) => cmd.run(cli).await,
        }
    }
}
