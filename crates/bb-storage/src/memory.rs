//! In-memory `KvStore`. Nothing survives the process; useful for tests and
//! for hosts that opt out of durability.

use bb_core::traits::KvStore;
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a record, bypassing the trait. Handy for seeding
    /// corrupt or historical state in tests.
    pub fn preload(&self, key: &str, raw: &str) {
        self.records.insert(key.to_string(), raw.to_string());
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.records.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.records.remove(key);
    }
}
