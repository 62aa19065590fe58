use std::{collections::HashMap, fmt};

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

// durable key-value storage for a single preference
//
// implementations only move raw strings around; (de)serialization is the
// store's job so that every backend agrees on the format
pub trait PreferenceBackend {
    // false when the environment has no storage at all (e.g. a non-interactive
    // render), in which case the store never touches load/save
    fn is_available(&self) -> bool {
        true
    }

    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, raw: &str) -> Result<()>;
}

/// Read a boolean preference, falling back to `default` when storage is
/// missing, empty, or holds something that does not parse.
///
/// Never writes.
pub fn read<B: PreferenceBackend + ?Sized>(backend: &B, key: &str, default: bool) -> bool {
    if !backend.is_available() {
        return default;
    }

    let raw = match backend.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn!({key = key, err = %err}, "preference storage unreadable, using default");
            return default;
        }
    };

    match serde_json::from_str::<bool>(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!({key = key, raw = %raw, err = %err}, "malformed stored preference, using default");
            default
        }
    }
}

/// Persist `value` under `key`, overwriting whatever was there.
pub fn write<B: PreferenceBackend + ?Sized>(backend: &mut B, key: &str, value: bool) -> Result<()> {
    if !backend.is_available() {
        return Ok(());
    }

    let raw = serde_json::to_string(&value)?;

    backend
        .save(key, &raw)
        .with_context(|| format!("failed to persist preference {key}"))
}

type Subscriber = Box<dyn FnMut(bool)>;

// a single persisted boolean with synchronous change notification
//
// every change goes through set(): update the value, persist it, then tell
// the subscribers, in that order
pub struct PreferenceStore<B> {
    key: String,
    value: bool,
    backend: B,
    subscribers: Vec<Subscriber>,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn open(backend: B, key: impl Into<String>, default: bool) -> Self {
        let key = key.into();
        let value = read(&backend, &key, default);

        debug!({key = %key, value = value}, "opened preference store");

        PreferenceStore {
            key,
            value,
            backend,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> bool {
        self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(bool) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // push the current value out to storage and to every subscriber without
    // changing it
    //
    // this is what the page calls once on mount, so a default picked up from
    // the environment is written back immediately
    pub fn hydrate(&mut self) {
        self.persist();
        self.notify();
    }

    pub fn set(&mut self, value: bool) {
        self.value = value;
        self.persist();
        self.notify();
    }

    pub fn toggle(&mut self) {
        self.set(!self.value);
    }

    #[instrument(skip(self), fields(key = %self.key, value = self.value))]
    fn persist(&mut self) {
        if let Err(err) = write(&mut self.backend, &self.key, self.value) {
            warn!("{err:#}");
        }
    }

    fn notify(&mut self) {
        let value = self.value;
        for subscriber in self.subscribers.iter_mut() {
            subscriber(value);
        }
    }
}

impl<B> fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// in-memory backend
//
// used for tests and as the stand-in when the browser refuses to hand out
// localStorage
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    available: bool,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            entries: HashMap::new(),
            available: true,
            fail_writes: false,
        }
    }

    pub fn unavailable() -> Self {
        MemoryBackend {
            available: false,
            ..MemoryBackend::new()
        }
    }

    pub fn with_entry(mut self, key: &str, raw: &str) -> Self {
        self.entries.insert(key.to_owned(), raw.to_owned());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        MemoryBackend::new()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn is_available(&self) -> bool {
        self.available
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, raw: &str) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow::Error::msg("quota exceeded"));
        }

        self.entries.insert(key.to_owned(), raw.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    const KEY: &str = "isDarkMode";

    #[test]
    fn read_without_storage_returns_default() {
        let backend = MemoryBackend::unavailable().with_entry(KEY, "false");

        assert!(read(&backend, KEY, true));
        assert!(!read(&backend, KEY, false));
    }

    #[test]
    fn read_prefers_stored_value() {
        let backend = MemoryBackend::new().with_entry(KEY, "false");

        assert!(!read(&backend, KEY, true));
    }

    #[test]
    fn read_does_not_write_default() {
        let backend = MemoryBackend::new();

        assert!(read(&backend, KEY, true));
        assert_eq!(backend.entry(KEY), None);
    }

    #[test]
    fn malformed_value_falls_back() {
        let backend = MemoryBackend::new().with_entry(KEY, "{not json");
        assert!(read(&backend, KEY, true));

        let backend = MemoryBackend::new().with_entry(KEY, "\"yes\"");
        assert!(!read(&backend, KEY, false));
    }

    #[test]
    fn environment_default_is_written_on_hydrate() {
        let mut store = PreferenceStore::open(MemoryBackend::new(), KEY, true);
        assert!(store.get());
        assert_eq!(store.backend.entry(KEY), None);

        store.hydrate();
        assert_eq!(store.backend.entry(KEY), Some("true"));
    }

    #[test]
    fn toggle_persists_every_change() {
        let mut store = PreferenceStore::open(MemoryBackend::new().with_entry(KEY, "true"), KEY, false);

        store.toggle();
        assert!(!store.get());
        assert_eq!(store.backend.entry(KEY), Some("false"));

        store.toggle();
        assert!(store.get());
        assert_eq!(store.backend.entry(KEY), Some("true"));
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut store = PreferenceStore::open(MemoryBackend::new(), KEY, false);
        let before = store.get();

        store.toggle();
        store.toggle();

        assert_eq!(store.get(), before);
    }

    #[test]
    fn subscribers_see_value_after_persist() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = PreferenceStore::open(MemoryBackend::new(), KEY, false);

        let log = seen.clone();
        store.subscribe(move |dark| log.borrow_mut().push(dark));

        store.hydrate();
        store.toggle();
        store.set(true);

        assert_eq!(*seen.borrow(), vec![false, true, true]);
    }

    #[test]
    fn write_failure_keeps_in_memory_value() {
        let mut store = PreferenceStore::open(MemoryBackend::new().failing_writes(), KEY, false);

        store.toggle();

        assert!(store.get());
        assert_eq!(store.backend.entry(KEY), None);
    }

    #[test]
    fn unavailable_storage_still_toggles() {
        let mut store = PreferenceStore::open(MemoryBackend::unavailable(), KEY, true);

        store.toggle();

        assert!(!store.get());
        assert_eq!(store.backend.entry(KEY), None);
    }
}
