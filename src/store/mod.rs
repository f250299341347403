// Storage layer: the Topic Store and Email Corpus on top of a pluggable
// key-value backend.
//
// The default backend is a JSON file per store (`topic_keywords.json`,
// `emails.json`), wherever the config points. Tests use the in-memory
// backend.

pub mod traits;
pub mod json;
pub mod memory;
pub mod topics;
pub mod emails;

pub use emails::EmailCorpus;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use topics::TopicStore;
pub use traits::{RecordStore, Records};
