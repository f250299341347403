// Average word length of the email body.

use indexmap::IndexMap;

use super::char_len;
use super::traits::{FeatureGenerator, FeatureValue};
use crate::error::{ClassifierError, Result};
use crate::models::Email;

/// Mean character count of whitespace-separated body words.
///
/// Requires at least one word: an empty or whitespace-only body is a
/// generation error, not a zero.
pub struct WordLengthGenerator;

impl FeatureGenerator for WordLengthGenerator {
    fn name(&self) -> &'static str {
        "word_length"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["average_word_length"]
    }

    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>> {
        let lengths: Vec<usize> = email.body.split_whitespace().map(char_len).collect();

        if lengths.is_empty() {
            return Err(ClassifierError::FeatureGeneration {
                generator: self.name().to_string(),
                reason: "email body contains no words".to_string(),
            });
        }

        let average = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        Ok(IndexMap::from([(
            "average_word_length".to_string(),
            FeatureValue::Number(average),
        )]))
    }
}
