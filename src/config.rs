use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::package::PackageMode;
use crate::slot::{PersistentSlot, SlotValue};
use crate::storage::{KeyValueStore, keys};

/// Environment variable overriding [`EditorConfig::export_dir`]
pub const EXPORT_DIR_ENV: &str = "BRICK_EXPORT_DIR";

/// Editor settings, stored under [`keys::CONFIG`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // older or partial configs pick up defaults for missing fields
pub struct EditorConfig {
    pub document_debounce_ms: u64,
    pub script_debounce_ms: u64,
    pub manifest_debounce_ms: u64,
    pub package_mode: PackageMode,
    /// Native builds write exported files here
    pub export_dir: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            document_debounce_ms: 500,
            script_debounce_ms: 500,
            manifest_debounce_ms: 300,
            package_mode: PackageMode::Loose,
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl EditorConfig {
    /// Loads the stored config, falling back to defaults, then applies environment overrides.
    pub fn load<S>(store: &S) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let mut config = PersistentSlot::read(store, keys::CONFIG, Self::default());
        if let Some(dir) = std::env::var_os(EXPORT_DIR_ENV) {
            config.export_dir = PathBuf::from(dir);
        }
        log::debug!("Editor config: {:?}", config);
        config
    }

    pub fn document_debounce(&self) -> Duration {
        Duration::from_millis(self.document_debounce_ms)
    }

    pub fn script_debounce(&self) -> Duration {
        Duration::from_millis(self.script_debounce_ms)
    }

    pub fn manifest_debounce(&self) -> Duration {
        Duration::from_millis(self.manifest_debounce_ms)
    }
}

impl SlotValue for EditorConfig {
    fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
