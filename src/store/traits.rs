// Record store trait: backend-agnostic persistence for keyed records.
//
// Implementors: JsonFileStore (one JSON object per file), MemoryStore
// (in-process, for tests and embedding callers). Both the Topic Store and
// the Email Corpus sit on top of this trait, so swapping the on-disk format
// never touches caching or scoring.

use indexmap::IndexMap;

use crate::error::Result;

/// Insertion-ordered mapping from record key to record value.
pub type Records<V> = IndexMap<String, V>;

pub trait RecordStore<V>: Send + Sync {
    /// Read every persisted record. Empty or missing storage loads as an
    /// empty mapping.
    fn load(&self) -> Result<Records<V>>;

    /// Replace the persisted records. Readers must never observe a
    /// half-written state.
    fn save(&self, records: &Records<V>) -> Result<()>;
}
