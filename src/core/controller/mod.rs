//! The translation run controller
//!
//! Wires the rate limiter, dispatcher, and merger together and drives a
//! single run through its phases: build, dispatch (wave by wave), merge,
//! report, persist, and the optional repair hand-off.

mod progress;


pub use progress::Progress;

use crate::config::TranslationConfig;
use crate::core::dispatcher::{Dispatch, HttpDispatcher};
use crate::core::merger;
use crate::core::rate_limiter::RateLimiter;
use crate::core::traits::{RequestBuilder, ResponseParser};
use crate::core::types::{RecordId, RunReport};
use crate::storage::{RecordStore, StoreRepair};
use crate::utils::error::Result;
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Orchestrates one batch translation run
///
/// Owns the run report and the lifetime of the per-run rate limiter. The
/// request builder and response parser are injected, so the controller is
/// agnostic of any concrete translation provider.
pub struct Translator {
    config: TranslationConfig,
    builder: Arc<dyn RequestBuilder>,
    dispatcher: Arc<dyn Dispatch>,
    repair: Option<Arc<dyn StoreRepair>>,
}

impl Translator {
    /// Create a translator dispatching over HTTP
    pub fn new(
        config: TranslationConfig,
        builder: Arc<dyn RequestBuilder>,
        parser: Arc<dyn ResponseParser>,
    ) -> Self {
        let dispatcher = Arc::new(HttpDispatcher::new(
            parser,
            config.request_timeout(),
            config.pre_request_delay(),
        ));
        Self {
            config,
            builder,
            dispatcher,
            repair: None,
        }
    }

    /// Create a translator with a custom dispatch implementation
    pub fn with_dispatcher(
        config: TranslationConfig,
        builder: Arc<dyn RequestBuilder>,
        dispatcher: Arc<dyn Dispatch>,
    ) -> Self {
        Self {
            config,
            builder,
            dispatcher,
            repair: None,
        }
    }

    /// Attach the store-repair collaborator invoked on incomplete runs
    pub fn with_repair(mut self, repair: Arc<dyn StoreRepair>) -> Self {
        self.repair = Some(repair);
        self
    }

    /// Run one translation batch over the store
    ///
    /// Always delivers exactly one result per submitted descriptor; per-call
    /// failures degrade completeness, never availability. Only a build or
    /// persist error aborts the run.
    pub async fn run(&self, store: &mut RecordStore) -> Result<RunReport> {
        if !self.config.enabled {
            info!("translation disabled, skipping run");
            return Ok(RunReport::default());
        }

        let run_id = Uuid::new_v4();
        let descriptors = self.builder.build(store)?;
        let submitted = descriptors.len();
        info!(%run_id, submitted, "translation run starting");

        // Fresh admission state per run
        let limiter = RateLimiter::new(self.config.concurrency_limit, self.config.wave_size);
        let progress = Progress::new(submitted);

        let mut results = Vec::with_capacity(submitted);
        for (wave_index, wave) in limiter.waves(&descriptors).enumerate() {
            // All operations of this wave complete before the next starts
            let outcomes = join_all(wave.iter().map(|descriptor| {
                let limiter = limiter.clone();
                let dispatcher = self.dispatcher.clone();
                let progress = &progress;
                async move {
                    let _permit = limiter.admit().await;
                    let result = dispatcher.dispatch(descriptor).await;
                    progress.complete();
                    result
                }
            }))
            .await;

            info!(
                %run_id,
                wave = wave_index + 1,
                waves = limiter.wave_count(submitted),
                "wave drained"
            );
            results.extend(outcomes);
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        let merged = merger::merge(store, &results);

        let submitted_ids = unique_ids(&descriptors);
        let missing = merger::missing_translations(store, &submitted_ids);
        if !missing.is_empty() {
            warn!(
                %run_id,
                incomplete = missing.len(),
                ids = ?missing,
                "records still missing translated fields"
            );
        }

        store.persist().await?;

        if !missing.is_empty() && self.config.auto_repair {
            if let Some(repair) = &self.repair {
                repair.repair(&missing).await;
            }
        }

        let report = RunReport {
            submitted,
            merged,
            failed,
        };
        info!(
            %run_id,
            submitted = report.submitted,
            merged = report.merged,
            failed = report.failed,
            "translation run complete"
        );
        Ok(report)
    }
}

/// Record ids of the submitted descriptor set, deduplicated in order
fn unique_ids(descriptors: &[crate::core::types::RequestDescriptor]) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    descriptors
        .iter()
        .map(|d| d.record_id)
        .filter(|id| seen.insert(*id))
        .collect()
}
