// MemoryStore: in-process RecordStore backend.

use parking_lot::Mutex;

use super::traits::{RecordStore, Records};
use crate::error::Result;

pub struct MemoryStore<V> {
    records: Mutex<Records<V>>,
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Records::new()),
        }
    }

    /// Start with pre-populated records.
    pub fn with_records(records: Records<V>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl<V> RecordStore<V> for MemoryStore<V>
where
    V: Clone + Send,
{
    fn load(&self) -> Result<Records<V>> {
        Ok(self.records.lock().clone())
    }

    fn save(&self, records: &Records<V>) -> Result<()> {
        *self.records.lock() = records.clone();
        Ok(())
    }
}
