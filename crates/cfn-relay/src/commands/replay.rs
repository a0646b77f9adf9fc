use async_trait::async_trait;
use cfn_relay_core::config::{NOTIFICATION_TYPES_ENV, SNS_TOPIC_ARN_ENV, SUBJECT_PREFIX_ENV};
use cfn_relay_core::{
    LayeredEnv, Notification, Outcome, PublishError, Publisher, SnsPublisher, StdEnvProvider,
    handle_event,
};
use eyre::{Result, WrapErr};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use super::Command;

pub struct ReplayCommand {
    pub event_file: PathBuf,
    pub dry_run: bool,
    pub notification_types: Option<String>,
    pub topic_arn: Option<String>,
    pub subject_prefix: Option<String>,
}

#[async_trait(?Send)]
impl Command for ReplayCommand {
    #[expect(clippy::print_stdout, reason = "replay reports to the terminal")]
    async fn execute(&self) -> Result<()> {
        let outcome = if self.dry_run {
            self.replay_with(&StdoutPublisher).await?
        } else {
            let publisher = SnsPublisher::from_env().await;
            self.replay_with(&publisher).await?
        };

        match outcome {
            Outcome::Published { subject } => println!("Published: {subject}"),
            Outcome::Skipped(reason) => println!("Skipped: {reason}"),
        }
        Ok(())
    }
}

impl ReplayCommand {
    /// Run the saved event through the relay, publishing with `publisher`.
    pub async fn replay_with(&self, publisher: &dyn Publisher) -> Result<Outcome> {
        let event = load_event(&self.event_file).await?;

        let env = LayeredEnv::new(&StdEnvProvider)
            .with_override(NOTIFICATION_TYPES_ENV, self.notification_types.clone())
            .with_override(SNS_TOPIC_ARN_ENV, self.topic_arn.clone())
            .with_override(SUBJECT_PREFIX_ENV, self.subject_prefix.clone());

        let outcome = handle_event(&event, &env, publisher).await?;
        Ok(outcome)
    }
}

async fn load_event(path: &Path) -> Result<Value> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .wrap_err("Failed to read event from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read event file {}", path.display()))?
    };

    serde_json::from_str(&raw).wrap_err("Event is not valid JSON")
}

/// Prints notifications instead of sending them.
struct StdoutPublisher;

#[async_trait]
impl Publisher for StdoutPublisher {
    #[expect(clippy::print_stdout, reason = "dry runs print instead of publishing")]
    async fn publish(&self, notification: &Notification) -> Result<(), PublishError> {
        let rendered = serde_json::to_string_pretty(notification)
            .map_err(|e| PublishError::Rejected(e.to_string()))?;
        println!("{rendered}");
        Ok(())
    }
}
