//! Outbound request descriptors

use super::record::{FieldTag, RecordId};
use reqwest::Method;
use std::collections::HashMap;
use url::Url;

/// Immutable description of one outbound translation call
///
/// Built once per record field per run by the injected
/// [`RequestBuilder`](crate::core::traits::RequestBuilder); never mutated.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Record this request translates for
    pub record_id: RecordId,
    /// HTTP method
    pub method: Method,
    /// Target URL of the translation provider
    pub url: Url,
    /// Additional request headers
    pub headers: HashMap<String, String>,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// Optional JSON request body
    pub body: Option<serde_json::Value>,
    /// Which record field the response populates
    pub field: FieldTag,
}

impl RequestDescriptor {
    /// Create a GET descriptor with no headers, query, or body
    pub fn get(record_id: RecordId, url: Url, field: FieldTag) -> Self {
        Self {
            record_id,
            method: Method::GET,
            url,
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
            field,
        }
    }

    /// Create a POST descriptor carrying a JSON body
    pub fn post(record_id: RecordId, url: Url, field: FieldTag, body: serde_json::Value) -> Self {
        Self {
            record_id,
            method: Method::POST,
            url,
            headers: HashMap::new(),
            query: Vec::new(),
            body: Some(body),
            field,
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}
