//! Request building seam

use crate::core::types::RequestDescriptor;
use crate::storage::RecordStore;
use crate::utils::error::Result;

/// Produces the ordered sequence of outbound requests for a record set
///
/// Implementations are provider-specific: they know the translation API's
/// URL scheme, authentication, and payload format. The controller only sees
/// the resulting descriptors.
///
/// # Contract
///
/// - Must be deterministic given the same record set
/// - May omit records that need no translation
/// - An error aborts the run before any dispatch
/// ([`TranslatorError::Build`](crate::utils::error::TranslatorError::Build))
pub trait RequestBuilder: Send + Sync {
    /// Build one request descriptor per untranslated record field
    fn build(&self, records: &RecordStore) -> Result<Vec<RequestDescriptor>>;
}
