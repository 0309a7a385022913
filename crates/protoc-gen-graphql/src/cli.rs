use crate::commands;

/// With no subcommand, runs as a protoc plugin: reads a
/// `CodeGeneratorRequest` from stdin and writes the `CodeGeneratorResponse`
/// to stdout.
#[derive(clap::Parser, Debug)]
#[command(name = "protoc-gen-graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output (on stderr).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        commands::run_plugin().await
    }
}
