use common::StorageError;
use thiserror::Error;

use crate::keys::StorageKey;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected a write. Memory already holds the new state.
    #[error("Failed to persist {key}: {source}")]
    Write {
        key: StorageKey,
        #[source]
        source: StorageError,
    },

    /// The collection's largest id leaves no room for another record.
    #[error("No ids left in {key}")]
    IdExhausted { key: StorageKey },

    #[error("Failed to encode {key}: {source}")]
    Encode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode export document: {0}")]
    Export(#[source] serde_json::Error),

    #[error("Invalid import document: {0}")]
    InvalidImport(#[source] serde_json::Error),
}

impl StoreError {
    /// The storage key the failure concerns, if any.
    pub fn key(&self) -> Option<StorageKey> {
        match self {
            Self::Write { key, .. } | Self::IdExhausted { key } | Self::Encode { key, .. } => {
                Some(*key)
            }
            Self::Export(_) | Self::InvalidImport(_) => None,
        }
    }

    /// Whether retrying (e.g. with `ContentStore::flush`) can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
