// Error taxonomy for the classification pipeline.
//
// Validation errors (duplicate or unknown topic, invalid topic input) are
// recovered close to where they happen. Storage, generation, and I/O errors
// propagate to the caller and are reported as internal failures.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A topic with this name is already stored.
    #[error("topic '{0}' already exists")]
    DuplicateTopic(String),

    /// Lookup of a topic that is not in the Topic Store.
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),

    /// Topic name or description is blank.
    #[error("invalid topic: {0}")]
    InvalidTopic(String),

    /// The persisted file exists but is not the expected mapping shape.
    #[error("malformed storage at {}: {source}", .path.display())]
    MalformedStorage {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A generator could not process the email.
    #[error("feature generator '{generator}' failed: {reason}")]
    FeatureGeneration { generator: String, reason: String },

    /// Topic-based prediction needs at least one topic.
    #[error("no topics available to classify against")]
    NoTopics,

    #[error("storage I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClassifierError {
    /// Whether this error should surface as a generic internal failure
    /// rather than a validation outcome.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            Self::DuplicateTopic(_) | Self::UnknownTopic(_) | Self::InvalidTopic(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
