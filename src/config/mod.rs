//! Configuration for the translation controller
//!
//! All knobs live in one explicit structure passed to the controller at
//! construction; there is no module-level or global state.

use crate::utils::error::{Result, TranslatorError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_pre_request_delay_ms() -> u64 {
    1000
}

/// Translation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Master switch; when off a run is a no-op and issues no HTTP calls
    #[serde(default)]
    pub enabled: bool,
    /// Maximum concurrent in-flight requests; non-positive means unbounded
    #[serde(default)]
    pub concurrency_limit: i64,
    /// Requests per dispatch wave; non-positive means a single wave
    #[serde(default)]
    pub wave_size: i64,
    /// Invoke the store-repair collaborator when records remain incomplete
    #[serde(default)]
    pub auto_repair: bool,
    /// Budget for one whole HTTP call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Fixed courtesy delay before each call, in milliseconds
    #[serde(default = "default_pre_request_delay_ms")]
    pub pre_request_delay_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            concurrency_limit: 0,
            wave_size: 0,
            auto_repair: false,
            request_timeout_secs: default_request_timeout_secs(),
            pre_request_delay_ms: default_pre_request_delay_ms(),
        }
    }
}

impl TranslationConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TranslatorError::Config(format!("Failed to read config file: {}", e)))?;

        let config: TranslationConfig = serde_yaml::from_str(&content)
            .map_err(|e| TranslatorError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(TranslatorError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Merge with another configuration (other takes precedence on
    /// non-default fields)
    pub fn merge(mut self, other: Self) -> Self {
        if other.enabled {
            self.enabled = other.enabled;
        }
        if other.concurrency_limit != 0 {
            self.concurrency_limit = other.concurrency_limit;
        }
        if other.wave_size != 0 {
            self.wave_size = other.wave_size;
        }
        if other.auto_repair {
            self.auto_repair = other.auto_repair;
        }
        if other.request_timeout_secs != default_request_timeout_secs() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
        if other.pre_request_delay_ms != default_pre_request_delay_ms() {
            self.pre_request_delay_ms = other.pre_request_delay_ms;
        }
        self
    }

    /// Call timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Pre-call delay as a [`Duration`]
    pub fn pre_request_delay(&self) -> Duration {
        Duration::from_millis(self.pre_request_delay_ms)
    }
}
