//! Error types for the translation controller

mod error;

pub use error::{Result, TranslatorError};
