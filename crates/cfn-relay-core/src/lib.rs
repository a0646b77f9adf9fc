//! Filtering and republishing of CloudFormation stack notifications.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod message;
pub mod publisher;
pub mod test_utils;

pub use config::{EnvProvider, LayeredEnv, RelayConfig, StdEnvProvider};
pub use error::{ConfigError, EventError, PublishError};
pub use handler::{Outcome, SkipReason, handle_event};
pub use message::Notification;
pub use publisher::{Publisher, SnsPublisher};
