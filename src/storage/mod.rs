//! Durable key-value storage behind the draft slots.
//!
//! Every slot talks to a [`KeyValueStore`] instead of a process-wide global, so the
//! browser's `localStorage`, a file on disk and an in-memory map are interchangeable.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::MemoryStore;

use crate::error::StorageResult;

/// Namespaced keys. Every feature sharing the store owns a distinct key.
pub mod keys {
    /// Usage document text (`README.md`)
    pub const DOCUMENT: &str = "editor:markdown:draft";
    /// Launch script text (`template.sh`)
    pub const SCRIPT: &str = "editor:template:draft";
    /// Manifest object (`brick.json`)
    pub const MANIFEST: &str = "editor:brick:draft";
    /// Editor configuration
    pub const CONFIG: &str = "editor:config";
    /// Owned by the catalog browser; the editor never reads or writes it.
    pub const CATALOG_SETTINGS: &str = "app_settings";

    /// All keys in use, catalog settings included
    pub const ALL: [&str; 5] = [DOCUMENT, SCRIPT, MANIFEST, CONFIG, CATALOG_SETTINGS];
}

/// A durable mapping from string keys to serialized string values.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> StorageResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Opens the platform's durable store.
///
/// Falls back to an in-memory store when no durable location is available, in which
/// case drafts only live as long as the session.
pub fn open_default(app_id: &str) -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = app_id;
        match LocalStorage::open() {
            Ok(store) => return Box::new(store),
            Err(err) => log::warn!("localStorage unavailable, drafts will not persist: {}", err),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match eframe::storage_dir(app_id) {
            Some(dir) => return Box::new(FileStore::open(dir.join("drafts.json"))),
            None => log::warn!("No storage directory for {}, drafts will not persist", app_id),
        }
    }

    Box::new(MemoryStore::new())
}
