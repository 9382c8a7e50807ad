//! Request dispatch
//!
//! Issues one HTTP call per request descriptor and converts every failure
//! mode into a uniform result, so one bad record never aborts the batch.

mod http;


pub use http::HttpDispatcher;

use crate::core::types::{DispatchResult, RequestDescriptor};
use async_trait::async_trait;

/// Dispatch seam between the controller and the wire
///
/// Implementations never propagate errors past this boundary: every outcome
/// is a [`DispatchResult`].
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Issue the call described by `descriptor` and report its outcome
    async fn dispatch(&self, descriptor: &RequestDescriptor) -> DispatchResult;
}
