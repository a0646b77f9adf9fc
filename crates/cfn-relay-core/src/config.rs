use crate::error::ConfigError;
use std::collections::HashMap;

pub const NOTIFICATION_TYPES_ENV: &str = "NOTIFICATION_TYPES";
pub const SNS_TOPIC_ARN_ENV: &str = "SNS_TOPIC_ARN";
pub const SUBJECT_PREFIX_ENV: &str = "NOTIFICATION_SUBJECT_PREFIX";
pub const DEFAULT_SUBJECT_PREFIX: &str = "CloudFormation";

/// Source of environment variables.
///
/// The relay reads its settings through this trait so that tests and the
/// `replay` command can supply values without touching the process
/// environment.
pub trait EnvProvider: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvProvider;

impl EnvProvider for StdEnvProvider {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvProvider for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Overrides consulted before a fallback provider.
pub struct LayeredEnv<'a> {
    overrides: HashMap<String, String>,
    fallback: &'a dyn EnvProvider,
}

impl<'a> LayeredEnv<'a> {
    pub fn new(fallback: &'a dyn EnvProvider) -> Self {
        Self {
            overrides: HashMap::new(),
            fallback,
        }
    }

    pub fn with_override(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.overrides.insert(key.to_string(), value);
        }
        self
    }
}

impl std::fmt::Debug for LayeredEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredEnv")
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl EnvProvider for LayeredEnv<'_> {
    fn var(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .cloned()
            .or_else(|| self.fallback.var(key))
    }
}

/// Settings for a single relay invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Allow-listed status keywords, in the order they are tried.
    pub notification_types: Vec<String>,
    pub topic_arn: String,
    pub subject_prefix: String,
}

impl RelayConfig {
    /// Read the configuration from `env`.
    ///
    /// The notification type list is checked before the topic ARN, so a
    /// completely empty environment reports the missing type list.
    pub fn from_env(env: &dyn EnvProvider) -> Result<Self, ConfigError> {
        let notification_types = env
            .var(NOTIFICATION_TYPES_ENV)
            .map(|raw| parse_notification_types(&raw))
            .unwrap_or_default();
        if notification_types.is_empty() {
            return Err(ConfigError::MissingNotificationTypes(
                NOTIFICATION_TYPES_ENV,
            ));
        }

        let topic_arn = non_blank(env.var(SNS_TOPIC_ARN_ENV))
            .ok_or(ConfigError::MissingTopicArn(SNS_TOPIC_ARN_ENV))?;

        let subject_prefix = non_blank(env.var(SUBJECT_PREFIX_ENV))
            .unwrap_or_else(|| DEFAULT_SUBJECT_PREFIX.to_string());

        Ok(Self {
            notification_types,
            topic_arn,
            subject_prefix,
        })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// An empty entry would match every message as a substring, so it is never
/// kept.
pub fn parse_notification_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn parses_types_in_configured_order() {
        let config = RelayConfig::from_env(&env(&[
            (NOTIFICATION_TYPES_ENV, "UPDATE_COMPLETE,CREATE_COMPLETE"),
            (SNS_TOPIC_ARN_ENV, "chan-1"),
        ]))
        .unwrap();

        assert_eq!(
            config.notification_types,
            vec!["UPDATE_COMPLETE", "CREATE_COMPLETE"]
        );
        assert_eq!(config.topic_arn, "chan-1");
        assert_eq!(config.subject_prefix, DEFAULT_SUBJECT_PREFIX);
    }

    #[test]
    fn blank_entries_are_dropped() {
        assert_eq!(
            parse_notification_types(" DELETE_COMPLETE ,, ,ROLLBACK_COMPLETE,"),
            vec!["DELETE_COMPLETE", "ROLLBACK_COMPLETE"]
        );
        assert!(parse_notification_types(",,").is_empty());
        assert!(parse_notification_types("").is_empty());
    }

    #[test]
    fn missing_types_take_precedence_over_missing_arn() {
        let err = RelayConfig::from_env(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingNotificationTypes(NOTIFICATION_TYPES_ENV)
        );

        let err = RelayConfig::from_env(&env(&[(NOTIFICATION_TYPES_ENV, " , ")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingNotificationTypes(NOTIFICATION_TYPES_ENV)
        );
    }

    #[test]
    fn missing_or_blank_topic_arn_is_rejected() {
        for arn in [None, Some(""), Some("   ")] {
            let mut vars = env(&[(NOTIFICATION_TYPES_ENV, "CREATE_COMPLETE")]);
            if let Some(arn) = arn {
                vars.insert(SNS_TOPIC_ARN_ENV.to_string(), arn.to_string());
            }
            assert_eq!(
                RelayConfig::from_env(&vars).unwrap_err(),
                ConfigError::MissingTopicArn(SNS_TOPIC_ARN_ENV)
            );
        }
    }

    #[test]
    fn subject_prefix_can_be_overridden() {
        let config = RelayConfig::from_env(&env(&[
            (NOTIFICATION_TYPES_ENV, "CREATE_COMPLETE"),
            (SNS_TOPIC_ARN_ENV, "chan-1"),
            (SUBJECT_PREFIX_ENV, "Prod stacks"),
        ]))
        .unwrap();
        assert_eq!(config.subject_prefix, "Prod stacks");
    }

    #[test]
    fn layered_env_prefers_overrides() {
        let base = env(&[
            (NOTIFICATION_TYPES_ENV, "CREATE_COMPLETE"),
            (SNS_TOPIC_ARN_ENV, "from-env"),
        ]);
        let layered = LayeredEnv::new(&base)
            .with_override(SNS_TOPIC_ARN_ENV, Some("from-flag".to_string()))
            .with_override(SUBJECT_PREFIX_ENV, None);

        assert_eq!(layered.var(SNS_TOPIC_ARN_ENV).as_deref(), Some("from-flag"));
        assert_eq!(
            layered.var(NOTIFICATION_TYPES_ENV).as_deref(),
            Some("CREATE_COMPLETE")
        );
        assert_eq!(layered.var(SUBJECT_PREFIX_ENV), None);
    }
}
