use std::collections::BTreeMap;

use super::error::StorageError;
use super::traits::{KeyValueStore, validate_key};

/// In-memory key-value store.
///
/// The optional quota bounds the total number of bytes across all keys and
/// values, mirroring the per-origin limit of browser storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<u64>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `quota` bytes.
    pub fn with_quota(quota: u64) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Make every subsequent `set` fail until switched back off.
    pub fn fail_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Total bytes currently stored (keys plus values).
    pub fn used_bytes(&self) -> u64 {
        self.entries
            .iter()
            .map(|(k, v)| (k.len() + v.len()) as u64)
            .sum()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if self.reject_writes {
            return Err(StorageError::WriteRejected(format!(
                "store is refusing writes (key {key})"
            )));
        }

        if let Some(limit) = self.quota {
            let previous = self
                .entries
                .get(key)
                .map(|v| (key.len() + v.len()) as u64)
                .unwrap_or(0);
            let actual = self.used_bytes() - previous + (key.len() + value.len()) as u64;
            if actual > limit {
                return Err(StorageError::QuotaExceeded { actual, limit });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        Ok(self.entries.remove(key).is_some())
    }
}
