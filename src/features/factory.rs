// Feature generator factory: runs every registered generator on one email
// and merges the results into a single flat FeatureMap.
//
// Keys are `<generator>_<feature>`. If two generators still collide after
// prefixing, the later-registered one wins; its value replaces the earlier
// one in place. Generator errors are not suppressed here: one failing
// generator fails the whole batch.

use serde::Serialize;
use tracing::debug;

use super::embeddings::EmailEmbeddingsGenerator;
use super::keywords::KeywordsGenerator;
use super::non_text::NonTextGenerator;
use super::raw_email::RawEmailGenerator;
use super::spam::SpamGenerator;
use super::traits::{FeatureGenerator, FeatureMap};
use super::word_length::WordLengthGenerator;
use crate::error::Result;
use crate::models::Email;

/// Discovery entry for one registered generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub features: Vec<String>,
}

/// Ordered registry of feature generators. Order is fixed at construction.
pub struct FeatureGeneratorFactory {
    generators: Vec<Box<dyn FeatureGenerator>>,
}

impl Default for FeatureGeneratorFactory {
    fn default() -> Self {
        Self::new(vec![
            Box::new(SpamGenerator::default()),
            Box::new(WordLengthGenerator),
            Box::new(EmailEmbeddingsGenerator),
            Box::new(RawEmailGenerator),
            Box::new(NonTextGenerator),
            Box::new(KeywordsGenerator::default()),
        ])
    }
}

impl FeatureGeneratorFactory {
    /// Build a factory over an explicit generator list, in registration order.
    pub fn new(generators: Vec<Box<dyn FeatureGenerator>>) -> Self {
        Self { generators }
    }

    /// Run every generator on `email` and merge their outputs.
    pub fn generate_all_features(&self, email: &Email) -> Result<FeatureMap> {
        let mut features = FeatureMap::new();

        for generator in &self.generators {
            let name = generator.name();
            for (feature, value) in generator.generate(email)? {
                features.insert(format!("{name}_{feature}"), value);
            }
        }

        debug!(
            generators = self.generators.len(),
            features = features.len(),
            "Generated email features"
        );

        Ok(features)
    }

    /// List each generator with the feature names it produces.
    pub fn get_available_generators(&self) -> Vec<GeneratorInfo> {
        self.generators
            .iter()
            .map(|g| GeneratorInfo {
                name: g.name().to_string(),
                features: g.feature_names().iter().map(|f| f.to_string()).collect(),
            })
            .collect()
    }
}
