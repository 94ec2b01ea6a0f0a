use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// Browser `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl std::fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorage").finish_non_exhaustive()
    }
}

fn js_reason(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl LocalStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(js_reason(err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(js_reason(err)))
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        self.storage
            .set_item(key, &value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_owned(),
                reason: js_reason(err),
            })
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| StorageError::Unavailable(js_reason(err)))
    }
}
