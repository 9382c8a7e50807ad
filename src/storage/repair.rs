//! Store-repair collaborator
//!
//! Invoked after a run when records still lack translations and auto-repair
//! is enabled. Fire-and-forget from the controller's perspective.

use crate::core::types::RecordId;
use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// Downstream repair step for records left incomplete by a run
#[async_trait]
pub trait StoreRepair: Send + Sync {
    /// Hand over the ids of still-incomplete records
    ///
    /// Implementations own their error handling; nothing propagates back to
    /// the run.
    async fn repair(&self, gaps: &[RecordId]);
}

/// Gap artifact written by [`GapFileRepair`]
#[derive(Debug, Serialize)]
struct GapReport {
    /// When the run finished
    reported_at: chrono::DateTime<chrono::Utc>,
    /// Ids of records missing translated fields
    record_ids: Vec<RecordId>,
}

/// Writes incomplete-record ids to a JSON artifact
///
/// The artifact is the hand-off point for the downstream database-update
/// step that re-processes failed records.
pub struct GapFileRepair {
    path: PathBuf,
}

impl GapFileRepair {
    /// Create a repair hook writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StoreRepair for GapFileRepair {
    async fn repair(&self, gaps: &[RecordId]) {
        let report = GapReport {
            reported_at: chrono::Utc::now(),
            record_ids: gaps.to_vec(),
        };

        let content = match serde_json::to_string_pretty(&report) {
            Ok(content) => content,
            Err(e) => {
                error!("failed to serialize gap report: {}", e);
                return;
            }
        };

        match tokio::fs::write(&self.path, content).await {
            Ok(()) => info!(
                path = %self.path.display(),
                count = gaps.len(),
                "gap report written"
            ),
            Err(e) => error!(
                path = %self.path.display(),
                "failed to write gap report: {}",
                e
            ),
        }
    }
}
