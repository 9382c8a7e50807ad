//! Response parsing seam

use crate::core::types::FieldTag;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Extracts translated text from a raw provider response
///
/// Implementations are provider-specific. The dispatcher hands over the raw
/// HTTP response together with the field tag from the originating descriptor;
/// the parser returns translated text keyed by field.
///
/// # Contract
///
/// Any `Err` is treated by the dispatcher as equivalent to a dispatch
/// failure for the originating record; implementations should never panic.
#[async_trait]
pub trait ResponseParser: Send + Sync {
    /// Parse the response body into a field-tag → translated-text mapping
    async fn parse(
        &self,
        response: reqwest::Response,
        field: FieldTag,
    ) -> Result<HashMap<FieldTag, String>>;
}
