// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregator configuration
//!
//! Can be built in code or loaded from TOML:
//!
//! ```toml
//! error_event = "failed"
//! non_source = "wire_remaining"
//! ```

use crate::error::ConfigError;
use crate::event::{EventName, ERROR_EVENT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when an input element is not an event source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonSourcePolicy {
    /// Report the first offending element and leave the rest unwired
    #[default]
    StopWiring,
    /// Wire every valid source and report all offending elements together
    WireRemaining,
}

/// Settings shared by every aggregator built from this config
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregatorConfig {
    /// Event that sources emit on failure and that the aggregator emits when it fails
    pub error_event: String,
    pub non_source: NonSourcePolicy,
}

impl AggregatorConfig {
    pub fn new() -> Self {
        Self {
            error_event: ERROR_EVENT.to_string(),
            non_source: NonSourcePolicy::default(),
        }
    }

    pub fn with_error_event(mut self, event: impl Into<String>) -> Self {
        self.error_event = event.into();
        self
    }

    pub fn with_non_source_policy(mut self, policy: NonSourcePolicy) -> Self {
        self.non_source = policy;
        self
    }

    /// Parse a config from TOML; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The error event as an [`EventName`]. An empty string falls back to `"error"`.
    pub fn error_event(&self) -> EventName {
        if self.error_event.is_empty() {
            EventName::error()
        } else {
            EventName::Named(self.error_event.clone())
        }
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
