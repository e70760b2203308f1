//! Typed key-value store with automatic serialization.

use crate::{Storage, StorageError};
use serde::{de::DeserializeOwned, Serialize};

/// Typed view over a [`Storage`] backend.
///
/// Structured values go through JSON; plain string values (a theme
/// preference, a flag) can bypass serialization via the `*_raw` methods
/// so they are stored exactly as written.
#[derive(Clone)]
pub struct KvStore<S: Storage> {
    storage: S,
}

impl<S: Storage> KvStore<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get and deserialize the value under `key`.
    ///
    /// Returns `None` if the key is absent. An unparsable stored value is
    /// a [`StorageError::Serialization`]; policy for degrading that is the
    /// caller's.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.storage.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store `value` under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(key, &raw)
    }

    /// Delete `key` entirely.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key)
    }

    /// Get the value under `key` without deserializing.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key)
    }

    /// Store a plain string under `key` without serializing.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value)
    }
}
