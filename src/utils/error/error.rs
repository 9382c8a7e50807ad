//! Error handling for the translation controller
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the translation controller
pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Main error type for the translation controller
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request building errors (fatal, aborts the run before any dispatch)
    #[error("Request build error: {0}")]
    Build(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Store persistence errors (fatal to the run's outcome)
    #[error("Persist error: {0}")]
    Persist(String),
}

impl TranslatorError {
    /// Whether this error aborts a translation run
    ///
    /// Only build and persist errors are fatal; everything else is
    /// recovered locally and degrades the run's completeness.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TranslatorError::Build(_) | TranslatorError::Persist(_)
        )
    }
}
