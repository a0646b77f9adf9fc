use crate::config::{EnvProvider, RelayConfig};
use crate::error::PublishError;
use crate::event::extract_message;
use crate::message::{self, Notification};
use crate::publisher::Publisher;
use serde_json::Value;
use tracing::{info, warn};

/// What a single invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Published { subject: String },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Misconfigured,
    MalformedEvent,
    NotStackResource,
    NoMatchingType,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::Misconfigured => "relay is not configured",
            Self::MalformedEvent => "event could not be parsed",
            Self::NotStackResource => "event is not about the stack resource",
            Self::NoMatchingType => "no configured notification type matched",
        };
        f.write_str(reason)
    }
}

/// Relay one SNS event.
///
/// Configuration problems and malformed events are logged and end the
/// invocation without effect. Events that are not about the stack resource,
/// or that mention none of the configured notification types, are dropped
/// silently. A failed publish is returned to the caller.
pub async fn handle_event(
    event: &Value,
    env: &dyn EnvProvider,
    publisher: &dyn Publisher,
) -> Result<Outcome, PublishError> {
    let config = match RelayConfig::from_env(env) {
        Ok(config) => config,
        Err(err) => {
            warn!(target: "cfn_relay::handler", error = %err, "relay is not configured");
            return Ok(Outcome::Skipped(SkipReason::Misconfigured));
        }
    };

    let raw = match extract_message(event) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                target: "cfn_relay::handler",
                error = %err,
                event = %event,
                "Message could not be parsed"
            );
            return Ok(Outcome::Skipped(SkipReason::MalformedEvent));
        }
    };

    let normalized = message::normalize(raw);
    if !message::is_stack_event(&normalized) {
        return Ok(Outcome::Skipped(SkipReason::NotStackResource));
    }

    let Some(notification_type) =
        message::match_notification_type(&normalized, &config.notification_types)
    else {
        return Ok(Outcome::Skipped(SkipReason::NoMatchingType));
    };

    let notification = Notification::for_match(&config, notification_type, &normalized);
    publisher.publish(&notification).await?;

    info!(
        target: "cfn_relay::handler",
        subject = %notification.subject,
        topic_arn = %notification.topic_arn,
        "relayed stack notification"
    );

    Ok(Outcome::Published {
        subject: notification.subject,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NOTIFICATION_TYPES_ENV, SNS_TOPIC_ARN_ENV};
    use crate::test_utils::RecordingPublisher;
    use serde_json::json;
    use std::collections::HashMap;

    fn env() -> HashMap<String, String> {
        HashMap::from([
            (
                NOTIFICATION_TYPES_ENV.to_string(),
                "UPDATE_COMPLETE,CREATE_COMPLETE".to_string(),
            ),
            (SNS_TOPIC_ARN_ENV.to_string(), "chan-1".to_string()),
        ])
    }

    fn sns_event(message: &str) -> Value {
        json!({ "Records": [{ "Sns": { "Message": message } }] })
    }

    #[tokio::test]
    async fn relays_matching_stack_event() {
        let publisher = RecordingPublisher::new();
        let event = sns_event(
            "StackId='x'\nResourceType='AWS::CloudFormation::Stack'\nResourceStatus='UPDATE_COMPLETE'\n",
        );

        let outcome = handle_event(&event, &env(), &publisher).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Published {
                subject: "CloudFormation UPDATE_COMPLETE".to_string()
            }
        );
        let published = publisher.published().await;
        assert_eq!(published.len(), 1);
        assert_eq!(
            published[0].message,
            "StackId='x'\nResourceType='AWS::CloudFormation::Stack'\nResourceStatus='UPDATE_COMPLETE'\n"
        );
        assert_eq!(published[0].topic_arn, "chan-1");
    }

    #[tokio::test]
    async fn malformed_event_is_not_an_error() {
        let publisher = RecordingPublisher::new();
        let outcome = handle_event(&json!({ "Records": "nope" }), &env(), &publisher)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::MalformedEvent));
        assert!(publisher.published().await.is_empty());
    }

    #[tokio::test]
    async fn publish_failure_propagates() {
        let publisher = RecordingPublisher::failing("topic does not exist");
        let event = sns_event(
            "ResourceType='AWS::CloudFormation::Stack'\nResourceStatus='CREATE_COMPLETE'",
        );

        let err = handle_event(&event, &env(), &publisher).await.unwrap_err();
        assert!(matches!(err, PublishError::Rejected(reason) if reason == "topic does not exist"));
    }
}
