#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Control Dojo
//!
//! Railway-style Result combinators practised on beards and rollercoasters.
//!
//! This library re-exports the workspace crates and hosts the `dojo` CLI.

pub use control_dojos;
pub use dojo_control;

pub mod cli;
pub mod commands;
