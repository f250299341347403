// Feature generation: the registry of per-email feature generators and the
// factory that merges their outputs.

pub mod traits;
pub mod factory;
pub mod spam;
pub mod word_length;
pub mod embeddings;
pub mod raw_email;
pub mod non_text;
pub mod keywords;

use std::sync::LazyLock;

use regex_lite::Regex;

pub use factory::{FeatureGeneratorFactory, GeneratorInfo};
pub use traits::{FeatureGenerator, FeatureMap, FeatureValue};

// ASCII word tokens, optionally with one apostrophe suffix ("don't").
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z]+)?").unwrap());

/// Lowercased word tokens of `text`, in order of appearance.
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Character count in Unicode scalar values.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
