//! HTTP dispatcher implementation

use super::Dispatch;
use crate::core::traits::ResponseParser;
use crate::core::types::{DispatchResult, FieldTag, RequestDescriptor};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Dispatches translation requests over HTTP
///
/// Each call gets its own client scoped to that call, a fixed courtesy delay
/// before the request fires, and a call-level timeout covering connect,
/// write, and read. All errors (transport, timeout, non-2xx status, parse
/// failure) are caught here, logged with the record id, and converted to
/// [`DispatchResult::Failure`].
pub struct HttpDispatcher {
    /// Parser supplied by the provider integration
    parser: Arc<dyn ResponseParser>,
    /// Budget for the whole call
    timeout: Duration,
    /// Fixed delay before each call, independent of the rate limiter
    pre_request_delay: Duration,
}

impl HttpDispatcher {
    /// Create a dispatcher with the given call timeout and pre-call delay
    pub fn new(
        parser: Arc<dyn ResponseParser>,
        timeout: Duration,
        pre_request_delay: Duration,
    ) -> Self {
        Self {
            parser,
            timeout,
            pre_request_delay,
        }
    }

    /// Run the call and parse the response, propagating any error
    async fn try_dispatch(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<HashMap<FieldTag, String>> {
        // Independent session per call; no connection reuse across calls
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .build()?;

        let mut request = client.request(descriptor.method.clone(), descriptor.url.clone());
        for (name, value) in &descriptor.headers {
            request = request.header(name, value);
        }
        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request.send().await?.error_for_status()?;
        self.parser.parse(response, descriptor.field).await
    }
}

#[async_trait]
impl Dispatch for HttpDispatcher {
    async fn dispatch(&self, descriptor: &RequestDescriptor) -> DispatchResult {
        // Courtesy pacing toward the remote provider
        if !self.pre_request_delay.is_zero() {
            tokio::time::sleep(self.pre_request_delay).await;
        }

        match self.try_dispatch(descriptor).await {
            Ok(fields) => {
                debug!(
                    record_id = descriptor.record_id,
                    field = %descriptor.field,
                    "translation request succeeded"
                );
                DispatchResult::Success {
                    record_id: descriptor.record_id,
                    fields,
                }
            }
            Err(e) => {
                error!(
                    record_id = descriptor.record_id,
                    field = %descriptor.field,
                    "translation request failed: {}",
                    e
                );
                DispatchResult::Failure {
                    record_id: descriptor.record_id,
                }
            }
        }
    }
}
