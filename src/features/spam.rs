// Spam vocabulary detector.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::traits::{FeatureGenerator, FeatureValue};
use super::word_tokens;
use crate::error::Result;
use crate::models::Email;

const DEFAULT_SPAM_WORDS: &[&str] = &[
    "free",
    "winner",
    "won",
    "prize",
    "urgent",
    "cash",
    "guaranteed",
    "offer",
    "click",
    "limited",
    "bonus",
    "lottery",
    "congratulations",
    "credit",
    "viagra",
    "unsubscribe",
];

/// Flags emails containing any word from a spam vocabulary, as a whole word,
/// case-insensitively, in subject or body.
pub struct SpamGenerator {
    spam_words: HashSet<String>,
}

impl Default for SpamGenerator {
    fn default() -> Self {
        Self::with_words(DEFAULT_SPAM_WORDS.iter().copied())
    }
}

impl SpamGenerator {
    pub fn with_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            spam_words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    fn contains_spam(&self, text: &str) -> bool {
        word_tokens(text)
            .iter()
            .any(|token| self.spam_words.contains(token))
    }
}

impl FeatureGenerator for SpamGenerator {
    fn name(&self) -> &'static str {
        "spam"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["has_spam_words"]
    }

    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>> {
        let has_spam = self.contains_spam(&email.subject) || self.contains_spam(&email.body);
        Ok(IndexMap::from([(
            "has_spam_words".to_string(),
            FeatureValue::Flag(has_spam),
        )]))
    }
}
