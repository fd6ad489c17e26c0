//! Operational errors for the dojos.
//!
//! Validation outcomes never land here - they travel on the failure track of
//! the Result a validator returns. These errors cover the ride configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading and checking ride configuration.
#[derive(Debug, Error)]
pub enum DojoError {
    #[error("failed to read config file '{path}': {reason}")]
    ConfigReadFailed { path: PathBuf, reason: String },

    #[error("TOML parse error in '{path}': {reason}")]
    ConfigParseFailed { path: PathBuf, reason: String },

    #[error("invalid override {name}={value}: {reason}")]
    InvalidOverride {
        name: String,
        value: String,
        reason: String,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl DojoError {
    /// Create a config read error.
    pub fn config_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid environment override error.
    pub fn invalid_override(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOverride {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result alias for operations that can fail with [`DojoError`].
pub type DojoResult<T> = std::result::Result<T, DojoError>;
