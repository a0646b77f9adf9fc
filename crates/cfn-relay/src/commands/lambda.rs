use async_trait::async_trait;
use cfn_relay_core::{Publisher, SnsPublisher, StdEnvProvider, handle_event};
use eyre::{Result, eyre};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

use super::Command;

pub struct LambdaCommand;

#[async_trait(?Send)]
impl Command for LambdaCommand {
    async fn execute(&self) -> Result<()> {
        let publisher = SnsPublisher::from_env().await;
        let publisher = &publisher;

        info!(target: "cfn_relay::lambda", "Waiting for invocations");

        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
            relay(event, publisher).await
        }))
        .await
        .map_err(|e| eyre!("Lambda runtime failed: {}", e))
    }
}

/// Handle one invocation. Only publish failures fail the invocation.
async fn relay(
    event: LambdaEvent<Value>,
    publisher: &dyn Publisher,
) -> Result<(), lambda_runtime::Error> {
    let outcome = handle_event(&event.payload, &StdEnvProvider, publisher).await?;
    tracing::debug!(
        target: "cfn_relay::lambda",
        request_id = %event.context.request_id,
        ?outcome,
        "Invocation finished"
    );
    Ok(())
}
