use cfn_relay::cli::{Cli, Commands};
use cfn_relay::commands::{Command, lambda::LambdaCommand, replay::ReplayCommand};
use cfn_relay::utils::tracing::{LogOutput, init_tracing};
use clap::Parser;
use eyre::Result;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // The deployed bootstrap binary is started without arguments.
    match cli.command.unwrap_or(Commands::Lambda) {
        Commands::Lambda => {
            init_tracing(LogOutput::Lambda)?;
            LambdaCommand.execute().await
        }
        Commands::Replay {
            event_file,
            dry_run,
            notification_types,
            topic_arn,
            subject_prefix,
        } => {
            // Before tracing so RUST_LOG can come from the file.
            let env_file = cfn_relay::cli::config::load_env()?;
            init_tracing(LogOutput::Terminal)?;
            if let Some(path) = env_file {
                debug!(target: "cfn_relay::cli", path = %path.display(), "Loaded .env file");
            }

            ReplayCommand {
                event_file,
                dry_run,
                notification_types,
                topic_arn,
                subject_prefix,
            }
            .execute()
            .await
        }
    }
}
