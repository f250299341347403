// Length-distance similarity between an email and candidate texts.
//
// The email's embedding is the `email_embeddings_average_embedding` feature
// (0.0 when absent). A candidate's embedding is its character count. The
// similarity decays exponentially with the distance between the two:
//
//   similarity = exp(-|query - candidate| / 50.0)
//
// which is 1.0 exactly when the distance is zero and approaches 0.0 as the
// texts diverge in length. Scores are clamped below at f64::MIN_POSITIVE so
// very distant candidates still score strictly above zero.

use indexmap::IndexMap;
use tracing::debug;

use crate::features::FeatureMap;
use crate::models::{StoredEmail, TopicEntry};
use crate::store::Records;

/// Candidate key → similarity in (0, 1], in candidate iteration order.
pub type ScoreMap = IndexMap<String, f64>;

/// Feature key holding the email's scalar embedding.
pub const EMBEDDING_FEATURE: &str = "email_embeddings_average_embedding";

/// Distance at which similarity drops to 1/e.
pub const SIMILARITY_SCALE: f64 = 50.0;

/// The email's embedding from its features, or 0.0 when missing or
/// non-numeric.
pub fn query_embedding(features: &FeatureMap) -> f64 {
    features
        .get(EMBEDDING_FEATURE)
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Placeholder embedding of a candidate text: its character count.
pub fn text_embedding(text: &str) -> f64 {
    text.chars().count() as f64
}

/// Similarity between two scalar embeddings.
pub fn similarity(query: f64, candidate: f64) -> f64 {
    let distance = (query - candidate).abs();
    (-distance / SIMILARITY_SCALE).exp().max(f64::MIN_POSITIVE)
}

/// Score every topic by the length of its description.
pub fn score_topics(features: &FeatureMap, topics: &Records<TopicEntry>) -> ScoreMap {
    let query = query_embedding(features);
    let scores: ScoreMap = topics
        .iter()
        .map(|(name, entry)| {
            (
                name.clone(),
                similarity(query, text_embedding(&entry.description)),
            )
        })
        .collect();

    debug!(query, topics = scores.len(), "Scored topics");
    scores
}

/// Score every stored email by the length of its body.
pub fn score_emails(features: &FeatureMap, corpus: &Records<StoredEmail>) -> ScoreMap {
    let query = query_embedding(features);
    let scores: ScoreMap = corpus
        .keys()
        .map(|body| (body.clone(), similarity(query, text_embedding(body))))
        .collect();

    debug!(query, emails = scores.len(), "Scored stored emails");
    scores
}

/// Highest-scoring entry. On ties the first one in iteration order wins.
/// Returns None for an empty map.
pub fn best_match(scores: &ScoreMap) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (key, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((key.as_str(), score)),
        }
    }
    best
}
