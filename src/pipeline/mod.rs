// Inference pipeline: feature generation, scoring, and store mutations
// behind one service.

pub mod inference;

use serde::{Deserialize, Serialize};

pub use inference::InferenceService;

/// Whether `store_email` checks its topic against the Topic Store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicPolicy {
    /// Store emails with any topic label.
    #[default]
    Unchecked,
    /// Reject emails whose topic is not in the Topic Store.
    RequireKnownTopic,
}
