//! Per-value combinators for Railway-Oriented Programming.
//!
//! Every combinator here consumes a `Result` and hands back either the same
//! `Result` (pass-through taps) or a value derived from exactly one of its
//! tracks. None of them can panic.

use std::fmt::Display;

/// Extension trait providing railway combinators for any `Result`.
///
/// `Ok` is the success track, `Err` the failure track.
pub trait ResultExt<S, F>: Sized {
    /// Run a side effect on the success value, returning the Result unchanged.
    #[must_use]
    fn on_success_do<E: FnOnce(&S)>(self, effect: E) -> Self;

    /// Run a side effect on the failure value, returning the Result unchanged.
    #[must_use]
    fn on_failure_do<E: FnOnce(&F)>(self, effect: E) -> Self;

    /// Get the success value, or derive one from the failure.
    fn get_or_else<R: FnOnce(F) -> S>(self, recover: R) -> S;

    /// Fold both tracks into a single value.
    fn resolve<T, OS, OF>(self, on_success: OS, on_failure: OF) -> T
    where
        OS: FnOnce(S) -> T,
        OF: FnOnce(F) -> T;

    /// Keep a success only while `predicate` holds for it; otherwise switch
    /// to the failure track with `on_reject`.
    #[must_use]
    fn ensure<P, R>(self, predicate: P, on_reject: R) -> Self
    where
        P: FnOnce(&S) -> bool,
        R: FnOnce(&S) -> F;

    /// Map both tracks in a single operation.
    fn bimap<S2, F2, MS, MF>(self, on_success: MS, on_failure: MF) -> Result<S2, F2>
    where
        MS: FnOnce(S) -> S2,
        MF: FnOnce(F) -> F2;

    /// Convert to an `Option`, logging the failure if present.
    fn into_option_logged(self) -> Option<S>
    where
        F: Display;
}

impl<S, F> ResultExt<S, F> for Result<S, F> {
    fn on_success_do<E: FnOnce(&S)>(self, effect: E) -> Self {
        if let Ok(ref value) = self {
            effect(value);
        }
        self
    }

    fn on_failure_do<E: FnOnce(&F)>(self, effect: E) -> Self {
        if let Err(ref failure) = self {
            effect(failure);
        }
        self
    }

    fn get_or_else<R: FnOnce(F) -> S>(self, recover: R) -> S {
        self.unwrap_or_else(recover)
    }

    fn resolve<T, OS, OF>(self, on_success: OS, on_failure: OF) -> T
    where
        OS: FnOnce(S) -> T,
        OF: FnOnce(F) -> T,
    {
        match self {
            Ok(value) => on_success(value),
            Err(failure) => on_failure(failure),
        }
    }

    fn ensure<P, R>(self, predicate: P, on_reject: R) -> Self
    where
        P: FnOnce(&S) -> bool,
        R: FnOnce(&S) -> F,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Ok(value)
            } else {
                Err(on_reject(&value))
            }
        })
    }

    fn bimap<S2, F2, MS, MF>(self, on_success: MS, on_failure: MF) -> Result<S2, F2>
    where
        MS: FnOnce(S) -> S2,
        MF: FnOnce(F) -> F2,
    {
        match self {
            Ok(value) => Ok(on_success(value)),
            Err(failure) => Err(on_failure(failure)),
        }
    }

    fn into_option_logged(self) -> Option<S>
    where
        F: Display,
    {
        match self {
            Ok(value) => Some(value),
            Err(failure) => {
                tracing::warn!("Discarding failure: {}", failure);
                None
            }
        }
    }
}

/// Collapse a Result whose tracks carry the same type.
pub trait Collapse<T> {
    /// Take whichever value is present.
    fn collapse(self) -> T;
}

impl<T> Collapse<T> for Result<T, T> {
    fn collapse(self) -> T {
        match self {
            Ok(value) | Err(value) => value,
        }
    }
}

/// Build a pipeline step that runs `effect` on every failure it sees.
///
/// Meant for `Iterator::inspect`, where the Result flows on untouched:
///
/// ```
/// use dojo_control::on_failure_do;
///
/// let mut rejected = Vec::new();
/// let kept: Vec<i32> = vec![Ok(1), Err("two"), Ok(3)]
///     .into_iter()
///     .inspect(on_failure_do(|failure: &&str| rejected.push(*failure)))
///     .flatten()
///     .collect();
///
/// assert_eq!(kept, vec![1, 3]);
/// assert_eq!(rejected, vec!["two"]);
/// ```
pub fn on_failure_do<S, F, E>(mut effect: E) -> impl FnMut(&Result<S, F>)
where
    E: FnMut(&F),
{
    move |result: &Result<S, F>| {
        if let Err(failure) = result {
            effect(failure);
        }
    }
}

/// Build a pipeline step that runs `effect` on every success it sees.
pub fn on_success_do<S, F, E>(mut effect: E) -> impl FnMut(&Result<S, F>)
where
    E: FnMut(&S),
{
    move |result: &Result<S, F>| {
        if let Ok(value) = result {
            effect(value);
        }
    }
}
