//! # Control Dojos
//!
//! Exercises for the railway combinators in `dojo-control`.
//!
//! - [`king_beards`] - looking up a beard colour through optional levels
//! - [`rollercoasters`] - admission rules that report every broken rule, and
//!   souvenir photos for those who ride
//! - [`famous_people`] - sample riders
//! - [`config`] - ride rules loaded from defaults, TOML and environment
//!
//! ## Error Handling
//!
//! Validation outcomes are values on the failure track of a `Result`.
//! [`DojoError`] is reserved for configuration problems.

pub mod config;
mod error;
pub mod famous_people;
pub mod king_beards;
pub mod rollercoasters;

pub use config::{BannedRider, RideConfig};
pub use error::{DojoError, DojoResult};
pub use king_beards::{beard_colour, describe_beard_colour, explain_beard_colour, Beard, Country, King};
pub use rollercoasters::{MessageStyle, Person, RidePhoto, RideValidator};
