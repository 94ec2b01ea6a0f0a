use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// Native store: one JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing or unreadable file opens as empty.
    ///
    /// A file that does not parse is renamed to `<name>.corrupt` and the store
    /// starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                let backup = backup_path(&path);
                log::warn!(
                    "Corrupt store {}: {}; moving it to {}",
                    path.display(),
                    err,
                    backup.display()
                );
                if let Err(err) = fs::rename(&path, &backup) {
                    log::warn!("Failed to back up {}: {}", path.display(), err);
                }
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        log::debug!("Opened store {} ({} keys)", path.display(), entries.len());
        Self { path, entries }
    }

    fn persist(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StorageError::Serialization {
                key: self.path.display().to_string(),
                source,
            }
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        let previous = self.entries.insert(key.to_owned(), value);
        if let Err(err) = self.persist() {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => self.entries.insert(key.to_owned(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.persist() {
            self.entries.insert(key.to_owned(), previous);
            return Err(err);
        }
        Ok(())
    }
}

/// Where a corrupt store file is moved: `drafts.json` becomes `drafts.json.corrupt`
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}
