// Feature generator trait: the pluggable unit of the feature registry.
//
// Every generator is a pure function of an email. The factory prefixes each
// generator's feature names with the generator name before merging, so a
// generator only has to keep its own names unique.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Email;

/// Flat, insertion-ordered mapping from `<generator>_<feature>` to a value.
pub type FeatureMap = IndexMap<String, FeatureValue>;

/// A single feature value. Serialized untagged so the JSON stays plain
/// (`true`, `12`, `3.5`, `"text"`, `["a", "b"]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Terms(Vec<String>),
}

impl FeatureValue {
    /// Numeric view of the value. Flags, text, and term lists have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Integer(n) => Some(*n as f64),
            FeatureValue::Number(x) => Some(*x),
            _ => None,
        }
    }
}

/// Trait for anything that turns an email into named features.
pub trait FeatureGenerator: Send + Sync {
    /// Registry name, used as the key prefix.
    fn name(&self) -> &'static str;

    /// Names of the features `generate` produces, unprefixed.
    /// Must be answerable without an email.
    fn feature_names(&self) -> &'static [&'static str];

    /// Produce this generator's features for one email.
    fn generate(&self, email: &Email) -> Result<IndexMap<String, FeatureValue>>;
}
