//! # Dojo Control
//!
//! Railway-oriented helpers for `std::result::Result`.
//!
//! A `Result<S, F>` is read as a railway with two tracks: `Ok(S)` is the
//! success track and `Err(F)` the failure track. Exactly one track is ever
//! occupied, so nothing in this crate offers a way to reach into the wrong
//! side - callers fold, map or match.
//!
//! ## Layout
//!
//! - [`result`] - per-value combinators ([`ResultExt`], [`Collapse`]) and the
//!   pipeline helpers [`on_failure_do`] / [`on_success_do`]
//! - [`iter`] - sequence combinators ([`ResultIterExt`], [`successes`])
//! - [`validation`] - accumulating [`Validator`] plus small composition helpers

pub mod iter;
pub mod result;
pub mod validation;

pub use iter::{failures, successes, ResultIterExt};
pub use result::{on_failure_do, on_success_do, Collapse, ResultExt};
pub use validation::{compose, validate_all, Rule, Validator};
