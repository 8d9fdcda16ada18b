use common::KeyValueStore;
use tracing::{info, warn};

use super::ContentStore;
use crate::error::{Result, StoreError};
use crate::keys::StorageKey;
use crate::snapshot::PartialSnapshot;

/// Keys overwritten by an import, in export order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub applied: Vec<StorageKey>,
}

impl<B: KeyValueStore> ContentStore<B> {
    /// Serialize all six in-memory collections as a pretty-printed JSON document.
    pub fn export_all(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.state).map_err(StoreError::Export)
    }

    /// Overwrite every collection present in `document`.
    ///
    /// The document is fully parsed before anything changes, so a malformed
    /// document leaves both memory and the backend untouched. Keys that are
    /// missing or `null` keep their current data.
    pub fn import_all(&mut self, document: &str) -> Result<ImportSummary> {
        let partial: PartialSnapshot = serde_json::from_str(document).map_err(|e| {
            warn!(error = %e, "Rejected import document");
            StoreError::InvalidImport(e)
        })?;

        let applied = partial.present_keys();
        self.state = partial.merged_over(&self.state);

        info!(
            keys = ?applied.iter().map(StorageKey::as_str).collect::<Vec<_>>(),
            "Imported content"
        );
        self.persist_all(&applied)?;
        Ok(ImportSummary { applied })
    }
}
