// Count of non-text characters (punctuation, symbols, emoji).

use indexmap::IndexMap;

use super::traits::{FeatureGenerator, FeatureValue};
use crate::error::Result;
use crate::models::Email;

/// Counts characters in subject and body that are neither alphanumeric nor
/// whitespace.
pub struct NonTextGenerator;

fn non_text_chars(text: &str) -> usize {
    text.chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count()
}

impl FeatureGenerator for NonTextGenerator {
    fn name(&self) -> &'static str {
        "non_text"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["non_text_char_count"]
    }

    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>> {
        let count = non_text_chars(&email.subject) + non_text_chars(&email.body);
        Ok(IndexMap::from([(
            "non_text_char_count".to_string(),
            FeatureValue::Integer(count as i64),
        )]))
    }
}
