//! Debounced, durably-backed value cells.
//!
//! A [`PersistentSlot`] holds the authoritative in-memory value and mirrors it into a
//! [`KeyValueStore`] one debounce window after the last write. Storage trouble never
//! escapes a slot: it is logged and the in-memory value stays correct for the session.

mod debounce;

pub use debounce::Debouncer;

use std::time::Duration;

use crate::storage::KeyValueStore;

/// How a value is laid out in the durable store.
pub trait SlotValue: Clone {
    fn encode(&self) -> Result<String, serde_json::Error>;

    /// `None` means the stored text is unusable and the slot falls back to its default.
    fn decode(raw: &str) -> Option<Self>;
}

/// Text slots are stored verbatim.
impl SlotValue for String {
    fn encode(&self) -> Result<String, serde_json::Error> {
        Ok(self.clone())
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

/// A typed value cell bound to one key of the durable store.
#[derive(Debug, Clone)]
pub struct PersistentSlot<T> {
    key: String,
    value: T,
    default: T,
    debouncer: Debouncer,
}

impl<T: SlotValue> PersistentSlot<T> {
    /// Reads `key` from `store`, falling back to `default` when the key is absent,
    /// unreadable or does not decode.
    pub fn read<S>(store: &S, key: &str, default: T) -> T
    where
        S: KeyValueStore + ?Sized,
    {
        match store.get(key) {
            Ok(Some(raw)) => T::decode(&raw).unwrap_or_else(|| {
                log::warn!("Stored value for {} is unreadable, using default", key);
                default
            }),
            Ok(None) => default,
            Err(err) => {
                log::warn!("Failed to read {}: {}", key, err);
                default
            }
        }
    }

    /// Creates the slot, seeded from the store if it holds a usable value.
    pub fn open<S>(store: &S, key: impl Into<String>, default: T, window: Duration) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let key = key.into();
        let value = Self::read(store, &key, default.clone());
        Self {
            key,
            value,
            default,
            debouncer: Debouncer::new(window),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the in-memory value immediately and (re)starts the flush window.
    pub fn write(&mut self, value: T, now: Duration) {
        self.value = value;
        self.debouncer.trigger(now);
    }

    /// Mutates the in-memory value in place, then behaves like [`Self::write`].
    pub fn update(&mut self, now: Duration, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.debouncer.trigger(now);
    }

    /// Flushes to `store` if the debounce window has elapsed. Returns whether a flush ran.
    pub fn poll<S>(&mut self, store: &mut S, now: Duration) -> bool
    where
        S: KeyValueStore + ?Sized,
    {
        if self.debouncer.fire(now) {
            self.persist(store);
            true
        } else {
            false
        }
    }

    /// Flushes a pending write right away, e.g. when the application shuts down.
    pub fn flush<S>(&mut self, store: &mut S) -> bool
    where
        S: KeyValueStore + ?Sized,
    {
        if !self.debouncer.is_pending() {
            return false;
        }
        self.debouncer.cancel();
        self.persist(store);
        true
    }

    /// Removes the durable entry and resets to the default.
    ///
    /// A pending flush is cancelled so the cleared value cannot be written back.
    pub fn clear<S>(&mut self, store: &mut S)
    where
        S: KeyValueStore + ?Sized,
    {
        self.debouncer.cancel();
        self.value = self.default.clone();
        if let Err(err) = store.remove(&self.key) {
            log::warn!("Failed to remove {}: {}", self.key, err);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_until_flush(&self, now: Duration) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    fn persist<S>(&self, store: &mut S)
    where
        S: KeyValueStore + ?Sized,
    {
        let raw = match self.value.encode() {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Failed to serialize {}: {}", self.key, err);
                return;
            }
        };
        match store.set(&self.key, raw) {
            Ok(()) => log::trace!("Flushed {}", self.key),
            Err(err) => log::warn!("Failed to persist {}: {}", self.key, err),
        }
    }
}
