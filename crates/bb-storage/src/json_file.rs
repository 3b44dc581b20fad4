//! File-per-key `KvStore` over a data directory.
//!
//! Each record lives at `<root>/<key>.json`, the closest filesystem analog
//! to the browser storage the panel originally targeted. Writes are
//! synchronous; IO failures are logged and degrade to no-ops so the panel
//! never halts on a storage problem.

use std::fs;
use std::path::{Path, PathBuf};

use bb_core::traits::KvStore;

pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// The directory is created lazily on the first write, so constructing
    /// a store never fails.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // Keys are fixed identifiers from `bb_core::traits::keys`, never
    // user-supplied, so plain joining is safe here.
    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.record_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.root) {
            tracing::warn!(root = %self.root.display(), error = %err, "cannot create data directory");
            return;
        }
        if let Err(err) = fs::write(self.record_path(key), value) {
            tracing::warn!(key, error = %err, "dropping durable write");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = fs::remove_file(self.record_path(key)) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key, error = %err, "could not remove record");
            }
        }
    }
}
