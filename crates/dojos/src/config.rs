//! Ride configuration loading
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults (the Mondo Looper rules)
//! 2. Config file: `--config <path>`, else `./mondo-looper.toml` if present
//! 3. Environment variables: `MONDO_MIN_HEIGHT_CM`, `MONDO_MAX_HEIGHT_CM`
//!
//! # Example Config
//!
//! ```toml
//! min_height_cm = 120
//! max_height_cm = 210
//! message_style = "named"
//!
//! [[banned_riders]]
//! name = "Donald Trump"
//! message = "SEE YOU IN COURT, THE SECURITY OF OUR ROLLERCOASTER IS AT STAKE"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DojoError, DojoResult};
use crate::rollercoasters::MessageStyle;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mondo-looper.toml";

/// Environment override for the minimum height.
pub const MIN_HEIGHT_ENV: &str = "MONDO_MIN_HEIGHT_CM";

/// Environment override for the maximum height.
pub const MAX_HEIGHT_ENV: &str = "MONDO_MAX_HEIGHT_CM";

/// Name of the rider banned from the Mondo Looper.
pub const DONALD_TRUMP: &str = "Donald Trump";

/// Message given to the banned rider.
pub const BAN_MESSAGE: &str = "SEE YOU IN COURT, THE SECURITY OF OUR ROLLERCOASTER IS AT STAKE";

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RideConfig {
    /// Riders shorter than this are turned away.
    pub min_height_cm: u32,
    /// Riders this tall or taller are turned away.
    pub max_height_cm: u32,
    pub message_style: MessageStyle,
    pub banned_riders: Vec<BannedRider>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannedRider {
    pub name: String,
    pub message: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

impl Default for RideConfig {
    fn default() -> Self {
        Self {
            min_height_cm: 120,
            max_height_cm: 210,
            message_style: MessageStyle::Anonymous,
            banned_riders: vec![BannedRider {
                name: DONALD_TRUMP.to_string(),
                message: BAN_MESSAGE.to_string(),
            }],
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

impl RideConfig {
    /// Load configuration following the documented hierarchy.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - An explicit config file cannot be read or parsed
    /// - An environment override is not a whole number of centimetres
    /// - The resulting height window is empty
    pub fn load(explicit: Option<&Path>) -> DojoResult<Self> {
        Self::load_with(explicit, Path::new(DEFAULT_CONFIG_FILE), |name| {
            std::env::var(name).ok()
        })
    }

    /// [`RideConfig::load`] with the fallback file and environment supplied
    /// by the caller.
    ///
    /// `fallback` is only read when `explicit` is `None` and it exists.
    ///
    /// # Errors
    ///
    /// Same as [`RideConfig::load`].
    pub fn load_with<L>(explicit: Option<&Path>, fallback: &Path, lookup: L) -> DojoResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let base = match explicit {
            Some(path) => Self::from_file(path)?,
            None if fallback.is_file() => Self::from_file(fallback)?,
            None => Self::default(),
        };

        base.with_env_overrides(lookup)?.validate()
    }

    /// Read a TOML config file; missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid config TOML.
    pub fn from_file(path: &Path) -> DojoResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DojoError::config_read_failed(path, e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded ride config file");

        toml::from_str(&contents).map_err(|e| DojoError::config_parse_failed(path, e.to_string()))
    }

    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not valid config TOML.
    pub fn from_toml_str(contents: &str) -> DojoResult<Self> {
        toml::from_str(contents)
            .map_err(|e| DojoError::config_parse_failed("<inline>", e.to_string()))
    }

    /// Apply height overrides fetched through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if an override is present but is not a `u32`.
    pub fn with_env_overrides<L>(self, lookup: L) -> DojoResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let min_height_cm = parse_override(MIN_HEIGHT_ENV, &lookup)?.unwrap_or(self.min_height_cm);
        let max_height_cm = parse_override(MAX_HEIGHT_ENV, &lookup)?.unwrap_or(self.max_height_cm);

        Ok(Self {
            min_height_cm,
            max_height_cm,
            ..self
        })
    }

    /// Check the height window is not empty.
    ///
    /// # Errors
    ///
    /// Returns error if `min_height_cm >= max_height_cm`.
    pub fn validate(self) -> DojoResult<Self> {
        if self.min_height_cm >= self.max_height_cm {
            return Err(DojoError::invalid_config(format!(
                "min_height_cm ({}) must be below max_height_cm ({})",
                self.min_height_cm, self.max_height_cm
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_message_style(self, message_style: MessageStyle) -> Self {
        Self {
            message_style,
            ..self
        }
    }
}

fn parse_override<L>(name: &str, lookup: &L) -> DojoResult<Option<u32>>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|e| DojoError::invalid_override(name, raw.clone(), e.to_string()))
        })
        .transpose()
}
