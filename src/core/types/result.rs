//! Dispatch outcomes and the per-run report

use super::record::{FieldTag, RecordId};
use std::collections::HashMap;

/// Outcome of one dispatched translation call
///
/// An explicit discriminated outcome: a failed call carries its record id for
/// diagnosis, never a sentinel value. The failure reason is logged at the
/// dispatch site and not propagated into the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The call succeeded and produced translated text per field
    Success {
        /// Record the translations belong to
        record_id: RecordId,
        /// Translated text keyed by field tag
        fields: HashMap<FieldTag, String>,
    },
    /// The call failed (network error, timeout, bad status, parse failure)
    Failure {
        /// Record whose translation is still missing
        record_id: RecordId,
    },
}

impl DispatchResult {
    /// The originating record id, regardless of outcome
    pub fn record_id(&self) -> RecordId {
        match self {
            DispatchResult::Success { record_id, .. } => *record_id,
            DispatchResult::Failure { record_id } => *record_id,
        }
    }

    /// Whether this is a successful outcome
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success { .. })
    }
}

/// Summary counts for one translation run
///
/// Used only for progress signaling and the caller's final accounting; not
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of request descriptors submitted
    pub submitted: usize,
    /// Number of results merged successfully into the store
    pub merged: usize,
    /// Number of dispatch failures
    pub failed: usize,
}
