use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relays CloudFormation stack notifications from one SNS topic to another.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve invocations from the AWS Lambda runtime API (default)
    Lambda,
    /// Run a saved SNS event through the relay
    Replay {
        /// Path to the event JSON, or `-` to read stdin
        event_file: PathBuf,
        /// Print the notification instead of publishing it
        #[arg(long)]
        dry_run: bool,
        /// Comma-separated notification types (overrides NOTIFICATION_TYPES)
        #[arg(long, value_name = "LIST")]
        notification_types: Option<String>,
        /// Destination topic (overrides SNS_TOPIC_ARN)
        #[arg(long, value_name = "ARN")]
        topic_arn: Option<String>,
        /// Subject prefix (overrides NOTIFICATION_SUBJECT_PREFIX)
        #[arg(long)]
        subject_prefix: Option<String>,
    },
}
