//! Beard colour lookup through Country → King → Beard.
//!
//! Every level may be missing. [`beard_colour`] answers `"n/a"` for any gap;
//! [`explain_beard_colour`] says which level was missing.

use dojo_control::{Collapse, ResultExt};
use serde::Serialize;

/// Answer given by [`beard_colour`] when there is no beard to describe.
pub const NOT_APPLICABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Beard {
    colour: String,
}

impl Beard {
    #[must_use]
    pub fn new(colour: impl Into<String>) -> Self {
        Self {
            colour: colour.into(),
        }
    }

    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct King {
    name: String,
    beard: Option<Beard>,
}

impl King {
    #[must_use]
    pub fn new(name: impl Into<String>, beard: Option<Beard>) -> Self {
        Self {
            name: name.into(),
            beard,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn beard(&self) -> Option<&Beard> {
        self.beard.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    name: String,
    king: Option<King>,
}

impl Country {
    #[must_use]
    pub fn new(name: impl Into<String>, king: Option<King>) -> Self {
        Self {
            name: name.into(),
            king,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn king(&self) -> Option<&King> {
        self.king.as_ref()
    }
}

/// Beard colour of the country's king, or `"n/a"`.
#[must_use]
pub fn beard_colour(country: &Country) -> String {
    explain_beard_colour(country).get_or_else(|_| NOT_APPLICABLE.to_string())
}

/// Beard colour of the country's king.
///
/// # Errors
///
/// Returns `"<country> has no king"` or `"<king> has no beard"` for the first
/// missing level.
pub fn explain_beard_colour(country: &Country) -> Result<String, String> {
    let king = country
        .king()
        .ok_or_else(|| format!("{} has no king", country.name()))?;
    let beard = king
        .beard()
        .ok_or_else(|| format!("{} has no beard", king.name()))?;

    Ok(beard.colour().to_string())
}

/// Beard colour, or the explanation of why there is none.
#[must_use]
pub fn describe_beard_colour(country: &Country) -> String {
    explain_beard_colour(country)
        .on_failure_do(|reason| tracing::debug!(country = country.name(), %reason, "no beard colour"))
        .collapse()
}
