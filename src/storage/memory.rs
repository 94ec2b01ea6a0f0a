use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// while the draft store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.inner.lock().entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        store
    }

    /// Returns a copy of the raw value stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.lock().entries.get(key).cloned()
    }

    /// Number of successful `set` calls since creation
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    /// Makes every subsequent `set` fail, as a full quota would
    pub fn fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        let mut inner = self.inner.lock();
        if inner.fail_writes {
            return Err(StorageError::WriteRejected {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        inner.entries.insert(key.to_owned(), value);
        inner.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.inner.lock().entries.remove(key);
        Ok(())
    }
}
