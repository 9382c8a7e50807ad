//! Result merging and the post-run consistency check
//!
//! The only place that mutates records. Runs single-threaded after all
//! dispatch concurrency has settled, so no locking is required.

use crate::core::types::{DispatchResult, RecordId};
use crate::storage::RecordStore;
use tracing::{debug, warn};

/// Merge successful results back into the record store
///
/// Every `Success` writes each translated field into its record by id,
/// unconditionally overwriting any prior value (last-write-wins). `Failure`
/// results are skipped; the record keeps whatever translations it already
/// had. Returns the number of results merged.
pub fn merge(store: &mut RecordStore, results: &[DispatchResult]) -> usize {
    let mut merged = 0;

    for result in results {
        let DispatchResult::Success { record_id, fields } = result else {
            continue;
        };

        match store.get_mut(*record_id) {
            Some(record) => {
                for (field, text) in fields {
                    record.set_translation(*field, text.clone());
                }
                merged += 1;
            }
            None => {
                warn!(record_id, "dispatch result references unknown record");
            }
        }
    }

    debug!(merged, total = results.len(), "merge completed");
    merged
}

/// Post-run invariant check over the submitted record set
///
/// Returns the ids of records that still lack a translated counterpart for
/// some non-empty source field. Violations are reported, never fatal.
pub fn missing_translations(store: &RecordStore, ids: &[RecordId]) -> Vec<RecordId> {
    ids.iter()
        .copied()
        .filter(|id| {
            store
                .get(*id)
                .is_some_and(|record| !record.is_fully_translated())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DispatchResult, FieldTag, Record};
    use std::collections::HashMap;

    fn store_with(ids: &[u64]) -> RecordStore {
        let mut store = RecordStore::in_memory();
        for &id in ids {
            store.insert(Record::new(id).with_source(FieldTag::Name, "finding"));
        }
        store
    }

    fn success(id: u64, text: &str) -> DispatchResult {
        DispatchResult::Success {
            record_id: id,
            fields: HashMap::from([(FieldTag::Name, text.to_string())]),
        }
    }

    #[test]
    fn test_merge_writes_translations() {
        let mut store = store_with(&[1, 2]);
        let results = vec![success(1, "发现一"), success(2, "发现二")];

        let merged = merge(&mut store, &results);

        assert_eq!(merged, 2);
        assert_eq!(
            store.get(1).unwrap().translated[&FieldTag::Name],
            "发现一"
        );
    }

    #[test]
    fn test_failures_are_skipped() {
        let mut store = store_with(&[1]);
        let results = vec![DispatchResult::Failure { record_id: 1 }];

        assert_eq!(merge(&mut store, &results), 0);
        assert!(store.get(1).unwrap().translated.is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut store = store_with(&[1]);
        let results = vec![success(1, "发现")];

        merge(&mut store, &results);
        let after_first = store.get(1).unwrap().clone();

        merge(&mut store, &results);
        let after_second = store.get(1).unwrap();

        assert_eq!(after_first.translated, after_second.translated);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = store_with(&[1]);
        let results = vec![success(1, "first"), success(1, "second")];

        merge(&mut store, &results);
        assert_eq!(store.get(1).unwrap().translated[&FieldTag::Name], "second");
    }

    #[test]
    fn test_unknown_record_does_not_count() {
        let mut store = store_with(&[1]);
        let results = vec![success(99, "ghost")];

        assert_eq!(merge(&mut store, &results), 0);
    }

    #[test]
    fn test_missing_translations_reports_gaps() {
        let mut store = store_with(&[1, 2, 3]);
        merge(&mut store, &[success(2, "翻译")]);

        let missing = missing_translations(&store, &[1, 2, 3]);
        assert_eq!(missing, vec![1, 3]);
    }

    #[test]
    fn test_missing_translations_empty_when_complete() {
        let mut store = store_with(&[1]);
        merge(&mut store, &[success(1, "翻译")]);

        assert!(missing_translations(&store, &[1]).is_empty());
    }
}
