//! Saving, loading and exporting automata.
//!
//! Persistence goes through the [`KeyValue`] seam: all saved automata live
//! under one key as a single JSON map, so any string key-value backend (a
//! browser's local storage, a file, a test map) can host the store. Saved
//! data is untrusted — loading re-runs the same validation as a library
//! load, and a payload without a `states` array fails structurally.

mod error;

pub use error::StoreError;

use crate::automaton::Automaton;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Key under which the whole saved-automata map is stored.
const SAVED_KEY: &str = "saved-automata";

/// Minimal string key-value backend.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory [`KeyValue`] backend for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// One saved slot: the automaton plus bookkeeping.
///
/// The automaton is flattened, so a bare automaton object (the shape older
/// exports used) is still an acceptable entry; `saved_at` is then absent.
#[derive(Serialize, Deserialize)]
struct SavedEntry {
    #[serde(flatten)]
    automaton: Automaton,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// Named storage for automata over an opaque key-value backend.
///
/// # Example
///
/// ```rust
/// use dfastage::library::library;
/// use dfastage::store::{AutomatonStore, MemoryStore};
///
/// let automaton = library().remove(0).automata.remove(0);
///
/// let mut store = AutomatonStore::new(MemoryStore::default());
/// store.save("my dfa", &automaton).unwrap();
///
/// assert_eq!(store.list_saved().unwrap(), vec!["my dfa".to_string()]);
/// assert_eq!(store.load("my dfa").unwrap(), automaton);
/// ```
pub struct AutomatonStore<K: KeyValue> {
    backend: K,
}

impl<K: KeyValue> AutomatonStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    /// Save `automaton` under `name`, overwriting any previous slot.
    pub fn save(&mut self, name: &str, automaton: &Automaton) -> Result<(), StoreError> {
        automaton.validate()?;

        let mut slots = self.read_slots()?;
        slots.insert(
            name.to_string(),
            SavedEntry {
                automaton: automaton.clone(),
                saved_at: Some(Utc::now()),
            },
        );
        self.backend.set(SAVED_KEY, serde_json::to_string(&slots)?);
        debug!(name, automaton = %automaton.name, "saved automaton");
        Ok(())
    }

    /// Load and validate the automaton saved under `name`.
    pub fn load(&self, name: &str) -> Result<Automaton, StoreError> {
        let mut slots = self.read_slots()?;
        let entry = slots
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        entry.automaton.validate()?;
        debug!(name, "loaded saved automaton");
        Ok(entry.automaton)
    }

    /// Names of all saved slots, sorted.
    pub fn list_saved(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_slots()?.into_keys().collect())
    }

    fn read_slots(&self) -> Result<BTreeMap<String, SavedEntry>, StoreError> {
        match self.backend.get(SAVED_KEY) {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(BTreeMap::new()),
        }
    }
}

/// Serialize an automaton to its canonical textual form: pretty-printed
/// UTF-8 JSON with keys in declaration order. Round-trips through
/// [`import_json`] with no information loss.
pub fn export_json(automaton: &Automaton) -> Result<String, StoreError> {
    automaton.validate()?;
    Ok(serde_json::to_string_pretty(automaton)?)
}

/// Parse and validate exported or hand-written automaton JSON.
pub fn import_json(data: &str) -> Result<Automaton, StoreError> {
    let automaton: Automaton = serde_json::from_str(data)?;
    automaton.validate()?;
    Ok(automaton)
}

/// Suggested download filename: lowercased, whitespace dashed, `.json`.
pub fn export_file_name(automaton: &Automaton) -> String {
    let base = if automaton.name.trim().is_empty() {
        "custom-dfa".to_string()
    } else {
        automaton
            .name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    };
    format!("{base}.json")
}
