//! Text handling for CloudFormation stack notifications.
//!
//! CloudFormation writes its SNS messages as newline-separated
//! `Key='value'` lines. The relay flattens them to a single comma-separated
//! line for matching and turns the commas back into newlines when it
//! republishes.

use crate::config::RelayConfig;
use serde::Serialize;

/// Marker present only in events about the stack resource itself.
pub const STACK_RESOURCE_MARKER: &str = "ResourceType='AWS::CloudFormation::Stack'";

/// SNS requires subjects shorter than 100 characters.
pub const MAX_SUBJECT_CHARS: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub subject: String,
    pub message: String,
    pub topic_arn: String,
}

impl Notification {
    /// Build the outbound notification for a normalized message that matched
    /// `notification_type`.
    pub fn for_match(config: &RelayConfig, notification_type: &str, normalized: &str) -> Self {
        Self {
            subject: build_subject(&config.subject_prefix, notification_type),
            message: restore(normalized),
            topic_arn: config.topic_arn.clone(),
        }
    }
}

pub fn normalize(raw: &str) -> String {
    raw.replace('\n', ",")
}

/// Inverse of [`normalize`]. Commas that were in the original text also
/// become newlines.
pub fn restore(normalized: &str) -> String {
    normalized.replace(',', "\n")
}

pub fn is_stack_event(normalized: &str) -> bool {
    normalized.contains(STACK_RESOURCE_MARKER)
}

/// First configured type, in list order, that occurs anywhere in the text.
pub fn match_notification_type<'a>(normalized: &str, types: &'a [String]) -> Option<&'a str> {
    types
        .iter()
        .map(String::as_str)
        .find(|notification_type| normalized.contains(notification_type))
}

pub fn build_subject(prefix: &str, notification_type: &str) -> String {
    let subject = format!("{prefix} {notification_type}");
    match subject.char_indices().nth(MAX_SUBJECT_CHARS) {
        Some((cut, _)) => subject[..cut].to_string(),
        None => subject,
    }
}
