pub mod config;
pub mod storage;

pub use config::{BackendKind, StorageConfig};
pub use storage::{FilesystemStore, KeyValueStore, MemoryStore, StorageError};
