use std::path::PathBuf;

use serde::Deserialize;

use crate::storage::{FilesystemStore, KeyValueStore, MemoryStore, StorageError};

/// Which persistence backend to open.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One JSON file per key under `data_dir`.
    #[default]
    Filesystem,
    /// Nothing survives the process. Useful for dry runs.
    Memory,
}

/// App-level storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Backend to use. Default: "filesystem".
    #[serde(default)]
    pub backend: BackendKind,
    /// Directory holding one file per key. Default: "./data".
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Largest value a single key may hold. Default: 5 MiB.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_max_value_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: default_data_dir(),
            max_value_bytes: default_max_value_bytes(),
        }
    }
}

impl StorageConfig {
    /// Open the configured backend.
    pub fn open(&self) -> Result<Box<dyn KeyValueStore>, StorageError> {
        Ok(match self.backend {
            BackendKind::Filesystem => Box::new(FilesystemStore::new(
                self.data_dir.clone(),
                self.max_value_bytes,
            )?),
            BackendKind::Memory => Box::new(MemoryStore::with_quota(self.max_value_bytes)),
        })
    }
}
