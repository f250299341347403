// Placeholder email "embedding": a single scalar derived from text length.
//
// This is not a semantic embedding. The scoring engine reads
// `email_embeddings_average_embedding` and compares it against the length of
// topic descriptions and stored email bodies; the contract is kept exact so
// scores stay comparable across implementations.

use indexmap::IndexMap;

use super::char_len;
use super::traits::{FeatureGenerator, FeatureValue};
use crate::error::Result;
use crate::models::Email;

/// Produces `average_embedding`: the mean of the subject's and the body's
/// character counts.
pub struct EmailEmbeddingsGenerator;

impl FeatureGenerator for EmailEmbeddingsGenerator {
    fn name(&self) -> &'static str {
        "email_embeddings"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["average_embedding"]
    }

    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>> {
        let subject_len = char_len(&email.subject) as f64;
        let body_len = char_len(&email.body) as f64;

        Ok(IndexMap::from([(
            "average_embedding".to_string(),
            FeatureValue::Number((subject_len + body_len) / 2.0),
        )]))
    }
}
