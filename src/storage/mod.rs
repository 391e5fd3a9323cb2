//! # Durable Key-Value Storage
//!
//! The cart survives restarts by writing a single string entry into a local
//! key-value store, overwritten wholesale after every successful mutation.
//!
//! ## Structure
//!
//! - [`KeyValueStore`] - The storage seam the cart actor writes through
//! - [`FileStore`] - JSON file on disk, one object mapping keys to string values
//! - [`MemoryStore`] - Process-local map for tests and throwaway sessions
//! - [`codec`] - Encoding the cart to and from its stored JSON form

pub mod codec;
pub mod file;

pub use codec::*;
pub use file::FileStore;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors that can occur while reading or writing the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON object of strings.
    #[error("Storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The store refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-valued key-value store that outlives the process.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads an entry. A missing entry is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces an entry wholesale.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`].
///
/// Clones share the same map, so a test can hand one clone to the cart and keep
/// another to inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_shares_entries_between_clones() {
        let store = MemoryStore::new();
        let observer = store.clone();

        assert_eq!(store.get("cart").await.unwrap(), None);
        store.set("cart", "[]".to_string()).await.unwrap();
        assert_eq!(observer.get("cart").await.unwrap(), Some("[]".to_string()));

        store.set("cart", "[1]".to_string()).await.unwrap();
        assert_eq!(observer.get("cart").await.unwrap(), Some("[1]".to_string()));
    }
}
