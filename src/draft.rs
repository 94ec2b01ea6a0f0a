use std::time::Duration;

use crate::config::EditorConfig;
use crate::manifest::{Manifest, ManifestField};
use crate::slot::PersistentSlot;
use crate::storage::{KeyValueStore, keys};

/// Which of the three draft fragments an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Document,
    Script,
    Manifest,
}

impl SlotKind {
    pub fn label(self) -> &'static str {
        match self {
            SlotKind::Document => "document",
            SlotKind::Script => "script",
            SlotKind::Manifest => "manifest",
        }
    }
}

/// A point-in-time copy of the three fragments, what gates and the packager look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub document: String,
    pub script: String,
    pub manifest: Manifest,
}

/// The three independent slots making up a draft, plus the store they flush into.
///
/// Slots share nothing but the store: each has its own key and its own debounce timer.
pub struct DraftStore {
    store: Box<dyn KeyValueStore>,
    document: PersistentSlot<String>,
    script: PersistentSlot<String>,
    manifest: PersistentSlot<Manifest>,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("document", &self.document)
            .field("script", &self.script)
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

impl DraftStore {
    /// Opens all three slots, seeding each from `store`.
    pub fn open(store: Box<dyn KeyValueStore>, config: &EditorConfig) -> Self {
        let document = PersistentSlot::open(
            &*store,
            keys::DOCUMENT,
            String::new(),
            config.document_debounce(),
        );
        let script =
            PersistentSlot::open(&*store, keys::SCRIPT, String::new(), config.script_debounce());
        let manifest = PersistentSlot::open(
            &*store,
            keys::MANIFEST,
            Manifest::default(),
            config.manifest_debounce(),
        );
        Self {
            store,
            document,
            script,
            manifest,
        }
    }

    pub fn document(&self) -> &str {
        self.document.value()
    }

    pub fn script(&self) -> &str {
        self.script.value()
    }

    pub fn manifest(&self) -> &Manifest {
        self.manifest.value()
    }

    pub fn snapshot(&self) -> Draft {
        Draft {
            document: self.document.value().clone(),
            script: self.script.value().clone(),
            manifest: self.manifest.value().clone(),
        }
    }

    pub fn set_document(&mut self, text: String, now: Duration) {
        self.document.write(text, now);
    }

    pub fn set_script(&mut self, text: String, now: Duration) {
        self.script.write(text, now);
    }

    pub fn set_manifest_field(&mut self, field: ManifestField, value: String, now: Duration) {
        self.manifest.update(now, |manifest| manifest.set(field, value));
    }

    /// Drops one fragment: durable entry removed, in-memory value back to its default.
    pub fn clear(&mut self, kind: SlotKind) {
        log::info!("Clearing {} draft", kind.label());
        match kind {
            SlotKind::Document => self.document.clear(&mut self.store),
            SlotKind::Script => self.script.clear(&mut self.store),
            SlotKind::Manifest => self.manifest.clear(&mut self.store),
        }
    }

    /// Runs every flush whose window has elapsed. Returns how many flushed.
    pub fn tick(&mut self, now: Duration) -> usize {
        [
            self.document.poll(&mut self.store, now),
            self.script.poll(&mut self.store, now),
            self.manifest.poll(&mut self.store, now),
        ]
        .into_iter()
        .filter(|flushed| *flushed)
        .count()
    }

    /// Flushes everything still pending, regardless of windows.
    pub fn flush_all(&mut self) -> usize {
        [
            self.document.flush(&mut self.store),
            self.script.flush(&mut self.store),
            self.manifest.flush(&mut self.store),
        ]
        .into_iter()
        .filter(|flushed| *flushed)
        .count()
    }

    pub fn has_pending(&self) -> bool {
        self.document.is_pending() || self.script.is_pending() || self.manifest.is_pending()
    }

    /// Time until the earliest pending flush, if any
    pub fn next_flush_in(&self, now: Duration) -> Option<Duration> {
        [
            self.document.time_until_flush(now),
            self.script.time_until_flush(now),
            self.manifest.time_until_flush(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
