//! Common test utilities for vulntran-rs
//!
//! Shared fixtures for the integration tests: a provider implementation
//! (request builder + response parser) targeting a mock translation API,
//! and record-store factories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;
use vulntran_rs::{
    FieldTag, Record, RecordId, RecordStore, RequestBuilder, RequestDescriptor, ResponseParser,
    Result, TranslationConfig, TranslatorError,
};

/// Builds one POST call per untranslated field of every record
///
/// The mock provider expects `{"text": ..., "target": "zh"}` and echoes the
/// translation back as `{"text": ...}`.
pub struct MockApiBuilder {
    endpoint: Url,
}

impl MockApiBuilder {
    pub fn new(server_uri: &str) -> Self {
        let endpoint = Url::parse(&format!("{}/translate", server_uri)).unwrap();
        Self { endpoint }
    }
}

impl RequestBuilder for MockApiBuilder {
    fn build(&self, records: &RecordStore) -> Result<Vec<RequestDescriptor>> {
        Ok(records
            .iter()
            .flat_map(|record| {
                record.missing_translations().into_iter().map(|field| {
                    let text = record.source[&field].clone();
                    RequestDescriptor::post(
                        record.id,
                        self.endpoint.clone(),
                        field,
                        serde_json::json!({"text": text, "target": "zh"}),
                    )
                })
            })
            .collect())
    }
}

/// Parses the mock provider's `{"text": "..."}` response shape
pub struct MockApiParser;

#[async_trait]
impl ResponseParser for MockApiParser {
    async fn parse(
        &self,
        response: reqwest::Response,
        field: FieldTag,
    ) -> Result<HashMap<FieldTag, String>> {
        let body: serde_json::Value = response.json().await?;
        let text = body
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TranslatorError::Store("response missing text field".to_string()))?;
        Ok(HashMap::from([(field, text.to_string())]))
    }
}

/// Provider pair for a mock server at `server_uri`
pub fn mock_provider(server_uri: &str) -> (Arc<dyn RequestBuilder>, Arc<dyn ResponseParser>) {
    (Arc::new(MockApiBuilder::new(server_uri)), Arc::new(MockApiParser))
}

/// A record with all three source fields populated
pub fn full_record(id: RecordId) -> Record {
    Record::new(id)
        .with_source(FieldTag::Name, format!("vulnerability {}", id))
        .with_source(FieldTag::Description, format!("description {}", id))
        .with_source(FieldTag::Solution, format!("solution {}", id))
}

/// An in-memory store of `count` fully populated records
pub fn store_of(count: u64) -> RecordStore {
    let mut store = RecordStore::in_memory();
    for id in 0..count {
        store.insert(full_record(id));
    }
    store
}

/// An enabled configuration with no courtesy delay and a short timeout
pub fn fast_config() -> TranslationConfig {
    TranslationConfig {
        enabled: true,
        request_timeout_secs: 2,
        pre_request_delay_ms: 0,
        ..Default::default()
    }
}
