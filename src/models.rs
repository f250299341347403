// Data models: the typed records that cross every layer.
//
// The persisted value types (`TopicEntry`, `StoredEmail`) serialize to
// exactly the JSON shape kept on disk. The rest are constructed per call
// and never persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::features::FeatureMap;
use crate::scoring::ScoreMap;

/// An incoming email. Immutable input to feature generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub subject: String,
    pub body: String,
}

impl Email {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Persisted value for a topic: `{"description": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub description: String,
}

/// A named topic with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
    pub description: String,
}

/// Persisted value for a stored email, keyed by body:
/// `{"topic": "...", "subject": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEmail {
    pub topic: String,
    pub subject: String,
}

/// A stored email flattened with its body key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEmailRecord {
    pub body: String,
    pub subject: String,
    pub topic: String,
}

/// Prediction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Compare against topic descriptions.
    #[default]
    Topic,
    /// Compare against previously stored emails.
    Email,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Topic => write!(f, "topic"),
            Strategy::Email => write!(f, "email"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topic" => Ok(Strategy::Topic),
            "email" => Ok(Strategy::Email),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'topic' or 'email')"
            )),
        }
    }
}

/// Result of a mutation that may be rejected without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    TopicAdded,
    TopicAlreadyExists,
    EmailAdded,
}

impl MutationOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            MutationOutcome::TopicAdded => "Topic Added",
            MutationOutcome::TopicAlreadyExists => "Topic already exists",
            MutationOutcome::EmailAdded => "Email Added",
        }
    }

    /// True when the mutation actually changed stored state.
    pub fn is_added(&self) -> bool {
        !matches!(self, MutationOutcome::TopicAlreadyExists)
    }
}

/// Everything a classification call produces.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub predicted_topic: String,
    /// Strategy that produced `predicted_topic`. Differs from the requested
    /// one only when the email strategy fell back to topics.
    pub strategy_used: Strategy,
    pub topic_scores: ScoreMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_scores: Option<ScoreMap>,
    /// Body key of the nearest stored email, for the email strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_email: Option<String>,
    pub features: FeatureMap,
    pub available_topics: Vec<String>,
}

/// Introspection over the topic side of the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineInfo {
    pub available_topics: Vec<String>,
    pub topics_with_descriptions: indexmap::IndexMap<String, String>,
}
