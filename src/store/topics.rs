// Topic Store: topic name → description, backed by a RecordStore.
//
// The in-memory cache is this handle's view of the topics. Reads take the
// read lock. `add` holds the write lock across the whole
// reload → check → save → replace cycle, so concurrent adds through the same
// handle can't lose each other's writes, and the new topic is visible to the
// next read. Separate handles or processes on the same file are only
// serialized at the file level: each save is atomic, and the last one wins.

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, info};

use super::traits::{RecordStore, Records};
use crate::error::{ClassifierError, Result};
use crate::models::{TopicEntry, TopicRecord};

pub struct TopicStore {
    backend: Box<dyn RecordStore<TopicEntry>>,
    cache: RwLock<Records<TopicEntry>>,
}

impl TopicStore {
    /// Open the store and load the persisted topics.
    pub fn open(backend: Box<dyn RecordStore<TopicEntry>>) -> Result<Self> {
        let records = backend.load()?;
        debug!(topics = records.len(), "Opened topic store");
        Ok(Self {
            backend,
            cache: RwLock::new(records),
        })
    }

    /// Re-read persisted state, replacing the cache.
    pub fn reload(&self) -> Result<()> {
        let records = self.backend.load()?;
        *self.cache.write() = records;
        Ok(())
    }

    /// Snapshot of every topic, in persisted order.
    pub fn load(&self) -> Records<TopicEntry> {
        self.cache.read().clone()
    }

    /// Topic names in persisted order.
    pub fn list_topics(&self) -> Vec<String> {
        self.cache.read().keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cache.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn get_description(&self, name: &str) -> Result<String> {
        self.cache
            .read()
            .get(name)
            .map(|entry| entry.description.clone())
            .ok_or_else(|| ClassifierError::UnknownTopic(name.to_string()))
    }

    /// Every topic as a typed record, in persisted order.
    pub fn records(&self) -> Vec<TopicRecord> {
        self.cache
            .read()
            .iter()
            .map(|(name, entry)| TopicRecord {
                name: name.clone(),
                description: entry.description.clone(),
            })
            .collect()
    }

    pub fn get_all_with_descriptions(&self) -> IndexMap<String, String> {
        self.cache
            .read()
            .iter()
            .map(|(name, entry)| (name.clone(), entry.description.clone()))
            .collect()
    }

    /// Add a new topic. Never overwrites: an existing name is
    /// `DuplicateTopic`, and a blank name or description is `InvalidTopic`.
    pub fn add(&self, name: &str, description: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ClassifierError::InvalidTopic(
                "topic name must not be empty".to_string(),
            ));
        }
        if description.trim().is_empty() {
            return Err(ClassifierError::InvalidTopic(format!(
                "description for '{name}' must not be empty"
            )));
        }

        let mut cache = self.cache.write();

        // Pick up writes made through other handles on the same backend
        let mut records = self.backend.load()?;
        if records.contains_key(name) {
            *cache = records;
            return Err(ClassifierError::DuplicateTopic(name.to_string()));
        }

        records.insert(
            name.to_string(),
            TopicEntry {
                description: description.to_string(),
            },
        );
        self.backend.save(&records)?;
        *cache = records;

        info!(topic = name, total = cache.len(), "Added topic");
        Ok(())
    }
}
