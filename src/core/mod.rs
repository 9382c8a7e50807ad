//! Core functionality of the translation controller
//!
//! This module contains the run orchestration, the dispatch pipeline, and
//! the data structures flowing through it.

pub mod controller;
pub mod dispatcher;
pub mod merger;
pub mod rate_limiter;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use controller::{Progress, Translator};
pub use dispatcher::{Dispatch, HttpDispatcher};
pub use rate_limiter::RateLimiter;
pub use traits::{RequestBuilder, ResponseParser};
pub use types::{DispatchResult, FieldTag, Record, RecordId, RequestDescriptor, RunReport};
