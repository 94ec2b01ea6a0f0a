#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod delivery;
pub mod draft;
pub mod error;
pub mod event;
pub mod manifest;
pub mod package;
pub mod panels;
pub mod slot;
pub mod storage;
pub mod workflow;

pub use app::BrickApp;
pub use config::EditorConfig;
pub use draft::{Draft, DraftStore, SlotKind};
pub use manifest::{Manifest, ManifestField};
pub use package::{Artifact, PackageMode};
pub use slot::PersistentSlot;
pub use storage::KeyValueStore;
pub use workflow::{GateError, Step, WorkflowController};
