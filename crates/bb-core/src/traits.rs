//! # Core Traits (Ports)
//!
//! The seams between the interaction engine and its host. Persistence is
//! deliberately synchronous: the contract is "durable by the time the call
//! returns", matching a client-side key/value store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PanelError, Result};

/// Ids of the durable records the panel shares with its host shell.
pub mod keys {
    pub const CHAT_MESSAGES: &str = "chatMessages";
    pub const BOOKMARKED_THREADS: &str = "bookmarkedThreads";
    pub const FOLLOWED_DISCUSSIONS: &str = "followedDiscussions";
    /// Collaborator concern (theme toggle); stored as "true"/"false".
    pub const DARK_MODE: &str = "darkMode";
}

/// Durable string key/value storage. A missing key is the normal first-run
/// case, not an error.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Supplies the display name used for the session's guest author.
/// Injectable so tests can pin a deterministic name.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GuestNamer: Send + Sync {
    fn guest_name(&self) -> String;
}

/// Loads and parses a record. `Ok(None)` means the key has never been
/// written; `Err(MalformedRecord)` means the stored bytes are corrupt.
pub fn load<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    match store.get(key) {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|source| {
            PanelError::MalformedRecord { key: key.to_string(), source }
        }),
    }
}

/// Loads a record, falling back to `default` on a missing key or a corrupt
/// record. The corrupt case is logged; the next save simply overwrites it.
pub fn load_or<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    match load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding malformed record");
            default()
        }
    }
}

/// Serializes and writes through immediately. Serialization of our own
/// models cannot realistically fail; if it somehow does we log and keep the
/// previous durable state rather than halt the panel.
pub fn save<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => tracing::warn!(key, error = %err, "failed to serialize record"),
    }
}
