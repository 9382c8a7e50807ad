//! Utility modules for the translation controller
//!
//! - **error**: Error handling types
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{Result, TranslatorError};
