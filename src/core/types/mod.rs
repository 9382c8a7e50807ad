//! Core data types for the translation run
//!
//! Records, request descriptors, dispatch outcomes, and the run report.

mod record;
mod request;
mod result;

pub use record::{FieldTag, Record, RecordId};
pub use request::RequestDescriptor;
pub use result::{DispatchResult, RunReport};
