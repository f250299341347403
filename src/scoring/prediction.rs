// Best-match prediction under both strategies.
//
// Topic strategy: the topic whose description length is closest to the
// email's embedding. Email strategy: the topic of the closest stored email,
// falling back to the topic strategy when the corpus is empty.

use serde::Serialize;

use super::similarity::{best_match, score_emails, score_topics, ScoreMap};
use crate::error::{ClassifierError, Result};
use crate::features::FeatureMap;
use crate::models::{StoredEmail, Strategy, TopicEntry};
use crate::store::Records;

/// A predicted topic and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub topic: String,
    pub strategy_used: Strategy,
    /// Body key of the stored email that decided an email-strategy prediction
    pub matched_email: Option<String>,
    pub score: f64,
}

/// Pick the best topic from precomputed topic scores.
pub fn predict_from_topic_scores(topic_scores: &ScoreMap) -> Result<Prediction> {
    let (topic, score) = best_match(topic_scores).ok_or(ClassifierError::NoTopics)?;
    Ok(Prediction {
        topic: topic.to_string(),
        strategy_used: Strategy::Topic,
        matched_email: None,
        score,
    })
}

/// Nearest-topic-description prediction.
pub fn predict_topic(features: &FeatureMap, topics: &Records<TopicEntry>) -> Result<Prediction> {
    predict_from_topic_scores(&score_topics(features, topics))
}

/// Nearest-stored-email prediction, falling back to `predict_topic` on an
/// empty corpus.
pub fn predict_similar_email(
    features: &FeatureMap,
    topics: &Records<TopicEntry>,
    corpus: &Records<StoredEmail>,
) -> Result<Prediction> {
    predict_from_email_scores(&score_emails(features, corpus), corpus)
        .map_or_else(|| predict_topic(features, topics), Ok)
}

/// Pick the topic of the best stored email, or None when there are no
/// email scores.
pub fn predict_from_email_scores(
    email_scores: &ScoreMap,
    corpus: &Records<StoredEmail>,
) -> Option<Prediction> {
    let (body, score) = best_match(email_scores)?;
    let stored = corpus.get(body)?;
    Some(Prediction {
        topic: stored.topic.clone(),
        strategy_used: Strategy::Email,
        matched_email: Some(body.to_string()),
        score,
    })
}
