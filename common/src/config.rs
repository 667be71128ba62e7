//! Runtime configuration of the conversion UI.
//!
//! Every field has a default, so an empty JSON object (or no document at all)
//! is a valid configuration. The frontend reads the document from the page it
//! is served in.

use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base of the remote service routes, without a trailing slash.
    pub api_base_url: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    pub workflow: WorkflowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            workflow: WorkflowConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(document)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

/// Timing of the orchestration runs.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorkflowConfig {
    /// How long a per-file error stays on screen before the next file starts.
    pub failure_pause_ms: u64,
    /// How long the full progress bar of a merge stays visible.
    pub merge_settle_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            failure_pause_ms: 1500,
            merge_settle_ms: 500,
        }
    }
}

impl WorkflowConfig {
    pub fn failure_pause(&self) -> Duration {
        Duration::from_millis(self.failure_pause_ms)
    }

    pub fn merge_settle(&self) -> Duration {
        Duration::from_millis(self.merge_settle_ms)
    }
}
