//! The file-save side effect at the end of an export.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod directory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDownload;
#[cfg(not(target_arch = "wasm32"))]
pub use directory::DirectoryDelivery;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::EditorConfig;
use crate::error::DeliveryError;
use crate::package::Artifact;

/// Hands a finished artifact to the user
pub trait Delivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), DeliveryError>;
}

/// Keeps delivered artifacts in memory. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MemoryDelivery {
    delivered: Arc<Mutex<Vec<Artifact>>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Vec<Artifact> {
        self.delivered.lock().clone()
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<(), DeliveryError> {
        self.delivered.lock().push(artifact.clone());
        Ok(())
    }
}

/// Browser download on the web
#[cfg(target_arch = "wasm32")]
pub fn platform_delivery(_config: &EditorConfig) -> Box<dyn Delivery> {
    Box::new(BrowserDownload)
}

/// A file in the configured export directory
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_delivery(config: &EditorConfig) -> Box<dyn Delivery> {
    Box::new(DirectoryDelivery::new(config.export_dir.clone()))
}
