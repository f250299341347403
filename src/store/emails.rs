// Email Corpus: previously stored emails keyed by body.
//
// Same caching discipline as the Topic Store. `append` is an unconditional
// upsert: storing a body that already exists replaces its subject and topic
// but keeps its position in the corpus.

use parking_lot::RwLock;
use tracing::{debug, info};

use super::traits::{RecordStore, Records};
use crate::error::Result;
use crate::models::{StoredEmail, StoredEmailRecord};

pub struct EmailCorpus {
    backend: Box<dyn RecordStore<StoredEmail>>,
    cache: RwLock<Records<StoredEmail>>,
}

impl EmailCorpus {
    pub fn open(backend: Box<dyn RecordStore<StoredEmail>>) -> Result<Self> {
        let records = backend.load()?;
        debug!(emails = records.len(), "Opened email corpus");
        Ok(Self {
            backend,
            cache: RwLock::new(records),
        })
    }

    pub fn reload(&self) -> Result<()> {
        let records = self.backend.load()?;
        *self.cache.write() = records;
        Ok(())
    }

    /// Snapshot of the corpus, in persisted order.
    pub fn load(&self) -> Records<StoredEmail> {
        self.cache.read().clone()
    }

    pub fn list_emails(&self) -> Vec<StoredEmailRecord> {
        self.cache
            .read()
            .iter()
            .map(|(body, email)| StoredEmailRecord {
                body: body.clone(),
                subject: email.subject.clone(),
                topic: email.topic.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Insert or replace the email stored under `body`.
    pub fn append(&self, body: &str, subject: &str, topic: &str) -> Result<()> {
        let mut cache = self.cache.write();

        let mut records = self.backend.load()?;
        let replaced = records
            .insert(
                body.to_string(),
                StoredEmail {
                    topic: topic.to_string(),
                    subject: subject.to_string(),
                },
            )
            .is_some();
        self.backend.save(&records)?;
        *cache = records;

        info!(topic, replaced, total = cache.len(), "Stored email");
        Ok(())
    }
}
