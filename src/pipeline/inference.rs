// Inference service: orchestrates classification for a single email.
//
// Given an email, this module:
// 1. Runs every feature generator
// 2. Scores all topics (always, for transparency in the result)
// 3. Scores the stored emails when the email strategy is requested
// 4. Picks the predicted topic, falling back to topics on an empty corpus
// 5. Packages scores, features, and the topic list into one result
//
// The service owns the two stores for the life of the process. Writes go
// through the stores, which refresh their own caches; the feature factory is
// never rebuilt.

use tracing::{debug, info, warn};

use super::TopicPolicy;
use crate::config::Config;
use crate::error::{ClassifierError, Result};
use crate::features::{FeatureGeneratorFactory, GeneratorInfo};
use crate::models::{
    ClassificationResult, Email, MutationOutcome, PipelineInfo, StoredEmail, Strategy, TopicEntry,
};
use crate::scoring::{
    predict_from_email_scores, predict_from_topic_scores, score_emails, score_topics,
};
use crate::store::{EmailCorpus, JsonFileStore, TopicStore};

pub struct InferenceService {
    factory: FeatureGeneratorFactory,
    topics: TopicStore,
    corpus: EmailCorpus,
    policy: TopicPolicy,
}

impl InferenceService {
    pub fn new(
        factory: FeatureGeneratorFactory,
        topics: TopicStore,
        corpus: EmailCorpus,
        policy: TopicPolicy,
    ) -> Self {
        Self {
            factory,
            topics,
            corpus,
            policy,
        }
    }

    /// Build the service over the JSON store files named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let topics = TopicStore::open(Box::new(JsonFileStore::<TopicEntry>::new(
            &config.topics_path,
        )))?;
        let corpus = EmailCorpus::open(Box::new(JsonFileStore::<StoredEmail>::new(
            &config.emails_path,
        )))?;
        Ok(Self::new(
            FeatureGeneratorFactory::default(),
            topics,
            corpus,
            config.topic_policy,
        ))
    }

    pub fn topics(&self) -> &TopicStore {
        &self.topics
    }

    pub fn corpus(&self) -> &EmailCorpus {
        &self.corpus
    }

    /// Classify an email under the given strategy.
    pub fn classify(&self, email: &Email, strategy: Strategy) -> Result<ClassificationResult> {
        let features = self
            .factory
            .generate_all_features(email)
            .inspect_err(|e| debug!(error = %e, "Feature generation failed"))?;

        let topics = self.topics.load();
        let topic_scores = score_topics(&features, &topics);

        let (prediction, email_scores) = match strategy {
            Strategy::Topic => (predict_from_topic_scores(&topic_scores)?, None),
            Strategy::Email => {
                let corpus = self.corpus.load();
                let email_scores = score_emails(&features, &corpus);
                let prediction = match predict_from_email_scores(&email_scores, &corpus) {
                    Some(prediction) => prediction,
                    None => {
                        info!("Email corpus is empty, falling back to topic strategy");
                        predict_from_topic_scores(&topic_scores)?
                    }
                };
                (prediction, Some(email_scores))
            }
        };

        info!(
            predicted = %prediction.topic,
            strategy = %prediction.strategy_used,
            score = prediction.score,
            "Classified email"
        );

        Ok(ClassificationResult {
            predicted_topic: prediction.topic,
            strategy_used: prediction.strategy_used,
            topic_scores,
            email_scores,
            matched_email: prediction.matched_email,
            features,
            available_topics: topics.keys().cloned().collect(),
        })
    }

    /// Add a topic. An existing name is a non-fatal `TopicAlreadyExists`.
    pub fn add_topic(&self, name: &str, description: &str) -> Result<MutationOutcome> {
        match self.topics.add(name, description) {
            Ok(()) => Ok(MutationOutcome::TopicAdded),
            Err(ClassifierError::DuplicateTopic(_)) => {
                warn!(topic = name, "Topic already exists, not overwriting");
                Ok(MutationOutcome::TopicAlreadyExists)
            }
            Err(e) => Err(e),
        }
    }

    /// Store a labelled email in the corpus. Under `RequireKnownTopic`, an
    /// unknown topic is rejected with `UnknownTopic`.
    pub fn store_email(&self, subject: &str, body: &str, topic: &str) -> Result<MutationOutcome> {
        if self.policy == TopicPolicy::RequireKnownTopic && !self.topics.contains(topic) {
            warn!(topic, "Rejected email for unknown topic");
            return Err(ClassifierError::UnknownTopic(topic.to_string()));
        }

        self.corpus.append(body, subject, topic)?;
        Ok(MutationOutcome::EmailAdded)
    }

    pub fn get_pipeline_info(&self) -> PipelineInfo {
        PipelineInfo {
            available_topics: self.topics.list_topics(),
            topics_with_descriptions: self.topics.get_all_with_descriptions(),
        }
    }

    pub fn available_generators(&self) -> Vec<GeneratorInfo> {
        self.factory.get_available_generators()
    }
}
