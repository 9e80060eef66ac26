//! Startup configuration, read from environment variables.

use thiserror::Error;

use stockroom_inventory::DuplicatePolicy;
use stockroom_observability::{LogFormat, LogSettings};

/// `EnvFilter` directive for the process logs.
pub const LOG_FILTER_VAR: &str = "STOCKROOM_LOG";
/// `json` or `pretty`.
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
/// `overwrite` or `reject`.
pub const DUPLICATES_VAR: &str = "STOCKROOM_DUPLICATES";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for environment variable '{key}': {details}")]
    Invalid { key: String, details: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log: LogSettings,
    pub duplicates: DuplicatePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset and blank
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| ConfigError::Invalid {
                key: LOG_FORMAT_VAR.to_string(),
                details: e.to_string(),
            })?,
            None => LogFormat::default(),
        };

        let duplicates = match get(DUPLICATES_VAR) {
            Some(raw) => raw.parse::<DuplicatePolicy>().map_err(|e| ConfigError::Invalid {
                key: DUPLICATES_VAR.to_string(),
                details: e.to_string(),
            })?,
            None => DuplicatePolicy::default(),
        };

        Ok(Self {
            log: LogSettings {
                filter: get(LOG_FILTER_VAR),
                format,
            },
            duplicates,
        })
    }
}
