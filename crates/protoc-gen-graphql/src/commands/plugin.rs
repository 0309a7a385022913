use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libprotographql::plugin;
use prost::Message;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;

#[derive(Debug, clap::Args)]
pub(crate) struct PluginCmd {}

#[inherent::inherent]
impl RunnableCommand for PluginCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match run_plugin().await {
            Ok(()) => CommandResult::silent(),
            Err(e) => CommandResult::stderr(format_args!(
                "{} protoc-gen-graphql failed: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

/// One request/response exchange with protoc.
///
/// Schema and option errors travel back to protoc inside the response. Only
/// an unreadable request or a broken pipe fails the process.
pub(crate) async fn run_plugin() -> anyhow::Result<()> {
    let mut request = vec![];
    tokio::io::stdin().read_to_end(&mut request).await?;
    log::debug!("Read a {} byte CodeGeneratorRequest.", request.len());

    let response = plugin::handle_request_bytes(&request)?;
    match &response.error {
        Some(error) => log::debug!("Responding with error: {error}"),
        None => log::debug!("Responding with {} generated files.", response.file.len()),
    }

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&response.encode_to_vec()).await?;
    stdout.flush().await?;
    Ok(())
}
