//! Test utilities for cfn-relay-core
//!
//! Exposed publicly so the binary crate and integration tests can drive the
//! handler without talking to SNS.

use crate::error::PublishError;
use crate::message::Notification;
use crate::publisher::Publisher;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Publisher that keeps every notification it is given.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<Notification>>>,
    fail_with: Option<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every call fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            published: Arc::default(),
            fail_with: Some(reason.into()),
        }
    }

    pub async fn published(&self) -> Vec<Notification> {
        self.published.lock().await.clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, notification: &Notification) -> Result<(), PublishError> {
        if let Some(reason) = &self.fail_with {
            return Err(PublishError::Rejected(reason.clone()));
        }
        self.published.lock().await.push(notification.clone());
        Ok(())
    }
}
