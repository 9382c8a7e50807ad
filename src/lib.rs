//! # vulntran-rs
//!
//! Batch translation dispatch controller for vulnerability records.
//! Translates record fields through an external HTTP translation service
//! with bounded concurrency, wave-based pacing, and per-request failure
//! isolation.
//!
//! ## Features
//!
//! - **Bounded Dispatch**: Semaphore-capped in-flight requests plus
//!   wave-sized batches that fully drain before the next wave starts
//! - **Failure Isolation**: One failed call degrades completeness, never
//!   the run; every submitted request yields exactly one result
//! - **Pluggable Providers**: Request building and response parsing are
//!   trait seams, so any translation API plugs in
//! - **Completeness Check**: After merging, records still missing
//!   translations are reported and optionally handed to a repair step
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vulntran_rs::{RecordStore, TranslationConfig, Translator};
//! # use vulntran_rs::{RequestBuilder, ResponseParser};
//! # fn provider() -> (Arc<dyn RequestBuilder>, Arc<dyn ResponseParser>) { unimplemented!() }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TranslationConfig::from_file("config/translate.yaml").await?;
//!     let (builder, parser) = provider();
//!
//!     let mut store = RecordStore::load("records.json").await?;
//!     let translator = Translator::new(config, builder, parser);
//!     let report = translator.run(&mut store).await?;
//!
//!     println!("merged {}/{}", report.merged, report.submitted);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::TranslationConfig;
pub use core::{
    Dispatch, DispatchResult, FieldTag, HttpDispatcher, Progress, RateLimiter, Record, RecordId,
    RequestBuilder, RequestDescriptor, ResponseParser, RunReport, Translator,
};
pub use storage::{GapFileRepair, RecordStore, StoreRepair};
pub use utils::error::{Result, TranslatorError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "vulntran-rs");
    }
}
