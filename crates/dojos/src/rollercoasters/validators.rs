//! Admission rules for the Mondo Looper.
//!
//! Each rule is a small `Fn(&Person) -> Result<(), String>`; [`RideValidator`]
//! stacks them into a [`Validator`] so a rider hears about every rule they
//! broke, not only the first.

use std::fmt;

use dojo_control::Validator;
use serde::{Deserialize, Serialize};

use crate::config::{BannedRider, RideConfig};
use crate::rollercoasters::Person;

/// How rejection messages address the rider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    /// "You must be 1m20 tall to ride"
    #[default]
    Anonymous,
    /// "Dopey must be 1m20 tall to ride"
    Named,
}

impl MessageStyle {
    fn subject(self, person: &Person) -> &str {
        match self {
            Self::Anonymous => "You",
            Self::Named => person.name(),
        }
    }
}

/// Render centimetres the way the ride signs do: `120` → `"1m20"`.
#[must_use]
pub fn metres(height_cm: u32) -> String {
    format!("{}m{:02}", height_cm / 100, height_cm % 100)
}

/// Riders must be at least `min_cm` tall.
pub fn minimum_height(
    min_cm: u32,
    style: MessageStyle,
) -> impl Fn(&Person) -> Result<(), String> + 'static {
    move |person: &Person| {
        if person.height_cm() < min_cm {
            Err(format!(
                "{} must be {} tall to ride",
                style.subject(person),
                metres(min_cm)
            ))
        } else {
            Ok(())
        }
    }
}

/// Riders must be shorter than `max_cm`.
pub fn maximum_height(
    max_cm: u32,
    style: MessageStyle,
) -> impl Fn(&Person) -> Result<(), String> + 'static {
    move |person: &Person| {
        if person.height_cm() >= max_cm {
            Err(format!(
                "{} must be under {} tall to ride",
                style.subject(person),
                metres(max_cm)
            ))
        } else {
            Ok(())
        }
    }
}

/// Turn away one named rider whatever their height.
pub fn banned(rider: BannedRider) -> impl Fn(&Person) -> Result<(), String> + 'static {
    move |person: &Person| {
        if person.name() == rider.name {
            Err(rider.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Every admission rule for one ride, built from a [`RideConfig`].
pub struct RideValidator {
    config: RideConfig,
    validator: Validator<Person, String>,
}

impl RideValidator {
    /// The Mondo Looper with its default rules.
    #[must_use]
    pub fn mondo_looper() -> Self {
        Self::from_config(RideConfig::default())
    }

    #[must_use]
    pub fn from_config(config: RideConfig) -> Self {
        let style = config.message_style;
        let validator = config.banned_riders.iter().cloned().fold(
            Validator::new()
                .rule(minimum_height(config.min_height_cm, style))
                .rule(maximum_height(config.max_height_cm, style)),
            |validator, rider| validator.rule(banned(rider)),
        );

        Self { config, validator }
    }

    /// Rebuild the rules with a different message style.
    #[must_use]
    pub fn with_style(self, style: MessageStyle) -> Self {
        Self::from_config(self.config.with_message_style(style))
    }

    #[must_use]
    pub const fn style(&self) -> MessageStyle {
        self.config.message_style
    }

    #[must_use]
    pub const fn config(&self) -> &RideConfig {
        &self.config
    }

    /// Admit `person`, or list every rule they broke.
    ///
    /// # Errors
    ///
    /// Returns one message per failed rule, in rule order: minimum height,
    /// maximum height, then bans.
    pub fn apply(&self, person: Person) -> Result<Person, Vec<String>> {
        tracing::debug!(rider = person.name(), height_cm = person.height_cm(), "checking rider");
        self.validator.validate(person)
    }
}

impl fmt::Debug for RideValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideValidator")
            .field("config", &self.config)
            .field("rules", &self.validator.len())
            .finish()
    }
}
