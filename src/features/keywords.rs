// Content keywords: non-stop-word tokens of subject and body.
//
// Uses the English stop list from the `stop-words` crate. The most frequent
// content words are reported as `top_terms`; ties keep the order in which
// the words first appeared.

use std::collections::HashSet;

use indexmap::IndexMap;
use stop_words::{get, LANGUAGE};

use super::traits::{FeatureGenerator, FeatureValue};
use super::word_tokens;
use crate::error::Result;
use crate::models::Email;

pub struct KeywordsGenerator {
    stop_words: HashSet<String>,
    /// How many terms to report in `top_terms`
    pub top_n: usize,
}

impl Default for KeywordsGenerator {
    fn default() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self {
            stop_words: stop_words.into_iter().collect(),
            top_n: 5,
        }
    }
}

impl KeywordsGenerator {
    fn content_words(&self, email: &Email) -> Vec<String> {
        word_tokens(&email.subject)
            .into_iter()
            .chain(word_tokens(&email.body))
            .filter(|w| !self.stop_words.contains(w))
            .collect()
    }
}

impl FeatureGenerator for KeywordsGenerator {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["content_word_count", "top_terms"]
    }

    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>> {
        let words = self.content_words(email);

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for word in &words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // Stable sort: equal counts stay in first-appearance order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let top_terms: Vec<String> = ranked
            .into_iter()
            .take(self.top_n)
            .map(|(w, _)| w.to_string())
            .collect();

        Ok(IndexMap::from([
            (
                "content_word_count".to_string(),
                FeatureValue::Integer(words.len() as i64),
            ),
            ("top_terms".to_string(), FeatureValue::Terms(top_terms)),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_ranks_by_frequency() {
        let generator = KeywordsGenerator::default();
        let features = generator
            .generate(&Email::new(
                "Invoice reminder",
                "The invoice is attached and the payment for the invoice is due",
            ))
            .unwrap();

        let FeatureValue::Terms(terms) = &features["top_terms"] else {
            panic!("top_terms should be a term list");
        };
        assert_eq!(terms[0], "invoice");
        assert!(!terms.iter().any(|t| t == "the"));
    }

    #[test]
    fn empty_email_has_no_terms() {
        let features = KeywordsGenerator::default()
            .generate(&Email::new("", ""))
            .unwrap();
        assert_eq!(features["content_word_count"], FeatureValue::Integer(0));
        assert_eq!(features["top_terms"], FeatureValue::Terms(vec![]));
    }
}
