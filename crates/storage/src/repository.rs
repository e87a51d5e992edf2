use std::sync::{Arc, Mutex};
use thiserror::Error;

use sifir_core::model::HallOfFameEntry;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for the hall-of-fame store.
///
/// The durable value is one logical key holding the complete entry
/// sequence. `save` is a full replace; `load` returns entries in stored
/// order and never re-sorts. Callers decide how to degrade on failure
/// (the service layer substitutes an empty list on a failed load).
pub trait HallOfFameRepository: Send + Sync {
    /// Read the full entry sequence from durable storage.
    ///
    /// An absent store is not an error: adapters return an empty vec.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the store exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Vec<HallOfFameEntry>, StorageError>;

    /// Replace the stored sequence with `entries`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the sequence cannot be written.
    fn save(&self, entries: &[HallOfFameEntry]) -> Result<(), StorageError>;
}

/// In-memory adapter for tests, with injectable failure switches to
/// exercise the fail-soft paths.
#[derive(Clone)]
pub struct InMemoryStore {
    entries: Arc<Mutex<Vec<HallOfFameEntry>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            fail_load: Arc::new(Mutex::new(false)),
            fail_save: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed the store with pre-existing entries.
    #[must_use]
    pub fn with_entries(entries: Vec<HallOfFameEntry>) -> Self {
        let store = Self::new();
        *store.entries.lock().expect("store mutex poisoned") = entries;
        store
    }

    /// Make subsequent `load` calls fail.
    pub fn set_fail_load(&self, fail: bool) {
        *self.fail_load.lock().expect("store mutex poisoned") = fail;
    }

    /// Make subsequent `save` calls fail.
    pub fn set_fail_save(&self, fail: bool) {
        *self.fail_save.lock().expect("store mutex poisoned") = fail;
    }

    /// Snapshot of the stored entries, for assertions.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HallOfFameEntry> {
        self.entries.lock().expect("store mutex poisoned").clone()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HallOfFameRepository for InMemoryStore {
    fn load(&self) -> Result<Vec<HallOfFameEntry>, StorageError> {
        if *self
            .fail_load
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?
        {
            return Err(StorageError::Connection("injected load failure".into()));
        }
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, entries: &[HallOfFameEntry]) -> Result<(), StorageError> {
        if *self
            .fail_save
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?
        {
            return Err(StorageError::Connection("injected save failure".into()));
        }
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = entries.to_vec();
        Ok(())
    }
}
