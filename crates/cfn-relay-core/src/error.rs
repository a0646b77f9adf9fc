use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("At least one CloudFormation notification type needs to be specified in {0}")]
    MissingNotificationTypes(&'static str),
    #[error("The ARN of the SNS topic needs to be specified in {0}")]
    MissingTopicArn(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("`Records` is empty")]
    EmptyRecords,
    #[error("field `{field}` is not {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to publish to {topic_arn}: {message}")]
    Sns { topic_arn: String, message: String },
    #[error("publish rejected: {0}")]
    Rejected(String),
}
