use crate::dlog;
use crate::error::{StorageError, TrackerError};
use crate::store::WorkoutStore;
use crate::types::Workout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key under which the workout list is stored.
pub const STORAGE_KEY: &str = "workouts";

/// A durable string key-value slot.
pub trait KeyValueSlot {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process slot. Clones share the same map, so a clone kept aside sees
/// what a controller wrote, the way a page reload sees the same storage.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let slot = Self::default();
        slot.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        slot
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueSlot for MemorySlot {
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Snapshots the store into a slot and reads it back.
///
/// Workouts are written as a JSON array of their own fields, derived ones
/// included, and read back as-is.
#[derive(Debug)]
pub struct Persistence<K> {
    slot: K,
}

impl<K: KeyValueSlot> Persistence<K> {
    pub const fn new(slot: K) -> Self {
        Self { slot }
    }

    pub const fn slot(&self) -> &K {
        &self.slot
    }

    pub fn save(&mut self, store: &WorkoutStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(store.as_slice())?;
        self.slot.set_item(STORAGE_KEY, &json)?;
        dlog!("saved workouts count={} bytes={}", store.len(), json.len());
        Ok(())
    }

    /// `None` when nothing was stored, or when what was stored is unreadable.
    /// `Some(vec![])` when an empty list was stored.
    pub fn load(&self) -> Option<Vec<Workout>> {
        let raw = match self.slot.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                dlog!("no stored workouts under key={STORAGE_KEY}");
                return None;
            }
            Err(e) => {
                tracing::warn!(err = %e, "reading stored workouts failed; starting empty");
                return None;
            }
        };

        match decode(&raw) {
            Ok(workouts) => workouts,
            Err(e) => {
                tracing::warn!(err = %e, "discarding stored workouts");
                None
            }
        }
    }

    /// Removes the key entirely.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.slot.remove_item(STORAGE_KEY)
    }
}

/// `null` decodes as absent, like a missing key.
fn decode(raw: &str) -> Result<Option<Vec<Workout>>, TrackerError> {
    serde_json::from_str::<Option<Vec<Workout>>>(raw)
        .map_err(|e| TrackerError::CorruptPersistedState(e.to_string()))
}
