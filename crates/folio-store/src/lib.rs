//! Key-value persistence for folio.
//!
//! The terminal core stores one JSON snapshot of the session under a single
//! key. Anything that can get and set strings by key can back it: the
//! in-memory store is used by tests and ephemeral sessions, the file store by
//! the desktop binary.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use folio_types::error::{FolioError, Result};

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Whether `key` currently holds a value.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}

/// Keys are restricted to `[A-Za-z0-9._-]` so that every store can map them
/// to a file name without escaping.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(FolioError::Store("empty key".to_string()));
    }
    if key.starts_with('.') {
        return Err(FolioError::Store(format!("key may not start with '.': {key}")));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(FolioError::Store(format!(
            "invalid character {bad:?} in key: {key}"
        )));
    }
    Ok(())
}
