//! Runtime tuning for the browser app.
//!
//! Defaults match the shipped game. A JSON override can be stored in the same
//! blob store under [`CONFIG_KEY`]; every field is optional and falls back to
//! its default.

use serde::Deserialize;
use tracing::warn;

use crate::plant::save::BlobStore;

/// Offline credit can be shortened by an override but never lengthened.
pub const MAX_OFFLINE_CAP_SECS: f64 = 3_600.0;

/// Blob-store key holding an optional JSON override.
pub const CONFIG_KEY: &str = "powerPlantConfigPC";

/// Errors that can occur when parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override is not valid JSON for [`SimConfig`].
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field parsed but is out of range.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// App-level settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimConfig {
    /// Save-slot key in the blob store.
    pub save_key: String,
    /// Autosave period in milliseconds.
    pub autosave_interval_ms: f64,
    /// Longest absence credited on load, in seconds.
    pub offline_cap_secs: f64,
    /// Entries kept in the on-screen event log.
    pub log_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            save_key: "powerPlantSavePC".into(),
            autosave_interval_ms: 5_000.0,
            offline_cap_secs: MAX_OFFLINE_CAP_SECS,
            log_capacity: 50,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.save_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "saveKey",
                reason: "must not be empty",
            });
        }
        if !self.autosave_interval_ms.is_finite() || self.autosave_interval_ms <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "autosaveIntervalMs",
                reason: "must be a positive number",
            });
        }
        if !self.offline_cap_secs.is_finite() || self.offline_cap_secs < 0.0 {
            return Err(ConfigError::Invalid {
                field: "offlineCapSecs",
                reason: "must be a non-negative number",
            });
        }
        if self.offline_cap_secs > MAX_OFFLINE_CAP_SECS {
            return Err(ConfigError::Invalid {
                field: "offlineCapSecs",
                reason: "must not exceed one hour",
            });
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "logCapacity",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Read the override from `store`. Missing, unreadable or invalid
    /// overrides all yield the defaults.
    pub fn load(store: &dyn BlobStore) -> Self {
        let json = match store.get(CONFIG_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!(error = %e, "config unreadable, using defaults");
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "config override rejected, using defaults");
                Self::default()
            }
        }
    }
}
