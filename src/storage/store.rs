//! JSON-file backed record store

use crate::core::types::{FieldTag, Record, RecordId};
use crate::utils::error::{Result, TranslatorError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The store of translatable records
///
/// Backed by a JSON file on disk; an in-memory variant exists for callers
/// that manage persistence themselves (and for tests). Only the merge phase
/// mutates records, single-threaded, so the store needs no interior locking.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Durable location; `None` for in-memory stores
    path: Option<PathBuf>,
    /// Records ordered by id
    records: BTreeMap<RecordId, Record>,
}

impl RecordStore {
    /// Create an empty store with no durable backing
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file
    ///
    /// A missing file yields an empty store bound to that path, so a first
    /// run can create it on persist.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            info!(path = %path.display(), "record store file missing, starting empty");
            return Ok(Self {
                path: Some(path),
                records: BTreeMap::new(),
            });
        }

        let content = tokio::fs::read_to_string(&path).await?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        let records = records.into_iter().map(|r| (r.id, r)).collect();

        debug!(path = %path.display(), "record store loaded");
        Ok(Self {
            path: Some(path),
            records,
        })
    }

    /// Flush the store to its durable location
    ///
    /// A write failure is fatal to the run's outcome and surfaces as
    /// [`TranslatorError::Persist`]. In-memory stores persist as a no-op.
    pub async fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let records: Vec<&Record> = self.records.values().collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| TranslatorError::Persist(format!("serialize records: {}", e)))?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| TranslatorError::Persist(format!("write {}: {}", path.display(), e)))?;

        info!(path = %path.display(), count = self.records.len(), "record store persisted");
        Ok(())
    }

    /// Insert or replace a record
    pub fn insert(&mut self, record: Record) {
        self.records.insert(record.id, record);
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Look up a record for mutation
    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.records.get_mut(&id)
    }

    /// Write a translated field by record id, overwriting any prior value
    ///
    /// Returns false when the id is unknown.
    pub fn set_translation(&mut self, id: RecordId, field: FieldTag, text: impl Into<String>) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.set_translation(field, text);
                true
            }
            None => false,
        }
    }

    /// Iterate records in id order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// All record ids in order
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.keys().copied().collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
