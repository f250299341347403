use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::Strategy;
use crate::pipeline::TopicPolicy;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store files
    pub data_dir: PathBuf,
    /// Topic store file (name → {"description"})
    pub topics_path: PathBuf,
    /// Email corpus file (body → {"topic", "subject"})
    pub emails_path: PathBuf,
    /// Strategy used when a caller doesn't pick one
    pub default_strategy: Strategy,
    /// Whether stored emails must reference an existing topic
    pub topic_policy: TopicPolicy,
}

/// Default data directory: the platform data dir, or `./mailsort` when the
/// platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailsort")
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("MAILSORT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let topics_path = env::var("MAILSORT_TOPICS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("topic_keywords.json"));

        let emails_path = env::var("MAILSORT_EMAILS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("emails.json"));

        let default_strategy = match env::var("MAILSORT_STRATEGY") {
            Ok(value) => value
                .parse::<Strategy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid MAILSORT_STRATEGY")?,
            Err(_) => Strategy::default(),
        };

        let topic_policy = match env::var("MAILSORT_VALIDATE_TOPICS").as_deref() {
            Ok("1") | Ok("true") | Ok("yes") => TopicPolicy::RequireKnownTopic,
            _ => TopicPolicy::Unchecked,
        };

        Ok(Self {
            data_dir,
            topics_path,
            emails_path,
            default_strategy,
            topic_policy,
        })
    }

    /// Config rooted at an explicit data directory, with defaults otherwise.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            topics_path: data_dir.join("topic_keywords.json"),
            emails_path: data_dir.join("emails.json"),
            data_dir,
            default_strategy: Strategy::default(),
            topic_policy: TopicPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_uses_conventional_file_names() {
        let config = Config::in_dir("/tmp/mailsort-test");
        assert_eq!(
            config.topics_path,
            PathBuf::from("/tmp/mailsort-test/topic_keywords.json")
        );
        assert_eq!(
            config.emails_path,
            PathBuf::from("/tmp/mailsort-test/emails.json")
        );
        assert_eq!(config.default_strategy, Strategy::Topic);
        assert_eq!(config.topic_policy, TopicPolicy::Unchecked);
    }
}
