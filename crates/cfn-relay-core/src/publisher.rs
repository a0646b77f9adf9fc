use crate::error::PublishError;
use crate::message::Notification;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::error::DisplayErrorContext;

/// Destination for relayed notifications.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, notification: &Notification) -> Result<(), PublishError>;
}

/// Publishes notifications to SNS.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS credential and region chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(aws_sdk_sns::Client::new(&config))
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, notification: &Notification) -> Result<(), PublishError> {
        let output = self
            .client
            .publish()
            .topic_arn(&notification.topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await
            .map_err(|err| PublishError::Sns {
                topic_arn: notification.topic_arn.clone(),
                message: DisplayErrorContext(err).to_string(),
            })?;

        tracing::debug!(
            target: "cfn_relay::publisher",
            topic_arn = %notification.topic_arn,
            message_id = output.message_id().unwrap_or_default(),
            "SNS accepted notification"
        );

        Ok(())
    }
}
