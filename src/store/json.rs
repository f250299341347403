// JsonFileStore: one JSON object per file, keyed by record key.
//
// Layout on disk is a plain object (`{"key": {...}, ...}`) in insertion
// order. A file that is missing, zero-length, or whitespace-only loads as an
// empty mapping. Each save writes its own uniquely named temp file in the
// target's directory, fsyncs it, and renames it over the target. Readers see
// either the old or the new contents, never a partial write, and concurrent
// savers never share a temp file. The last rename wins.

use std::fs;
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use super::traits::{RecordStore, Records};
use crate::error::{ClassifierError, Result};

pub struct JsonFileStore<V> {
    path: PathBuf,
    _record: PhantomData<fn() -> V>,
}

impl<V> JsonFileStore<V> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Directory that holds the store file and its temp files.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl<V> RecordStore<V> for JsonFileStore<V>
where
    V: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Records<V>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, starting empty");
                return Ok(Records::new());
            }
            Err(e) => return Err(ClassifierError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Records::new());
        }

        let records: Records<V> =
            serde_json::from_str(&contents).map_err(|source| ClassifierError::MalformedStorage {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), records = records.len(), "Loaded store");
        Ok(records)
    }

    fn save(&self, records: &Records<V>) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(dir).map_err(|e| ClassifierError::io(dir, e))?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| ClassifierError::io(&self.path, std::io::Error::other(e)))?;

        // Same directory as the target, so the rename stays on one filesystem
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ClassifierError::io(dir, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| ClassifierError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| ClassifierError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), records = records.len(), "Saved store");
        Ok(())
    }
}
