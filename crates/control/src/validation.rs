//! Validators built from small Result-returning rules.
//!
//! [`Validator`] runs every rule and collects one failure per rule that did
//! not hold, so a caller learns everything wrong with a value at once.
//! [`validate_all`] is the short-circuiting counterpart.

use std::fmt;

use crate::iter::ResultIterExt;

/// A single check over a borrowed value.
pub type Rule<T, F> = Box<dyn Fn(&T) -> Result<(), F>>;

/// Ordered set of rules whose failures accumulate.
pub struct Validator<T, F> {
    rules: Vec<Rule<T, F>>,
}

impl<T, F> Validator<T, F> {
    /// Create a validator with no rules; it accepts everything.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Rules run in the order they were added.
    #[must_use]
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Fn(&T) -> Result<(), F> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the validator has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against `value`.
    ///
    /// # Errors
    ///
    /// Returns one failure per rule that rejected the value, in rule order.
    pub fn validate(&self, value: T) -> Result<T, Vec<F>> {
        let failures: Vec<F> = self.rules.iter().map(|rule| rule(&value)).failures().collect();

        tracing::debug!(
            rules = self.rules.len(),
            failed = failures.len(),
            "validation finished"
        );

        if failures.is_empty() {
            Ok(value)
        } else {
            Err(failures)
        }
    }
}

impl<T, F> Default for Validator<T, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> fmt::Debug for Validator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Check `item` against each rule, stopping at the first failure.
///
/// # Errors
///
/// Returns the failure of the first rule that rejects `item`.
pub fn validate_all<T, F, R>(item: &T, rules: &[R]) -> Result<(), F>
where
    R: Fn(&T) -> Result<(), F>,
{
    rules.iter().try_fold((), |(), rule| rule(item))
}

/// Chain two Result-producing steps into one.
pub fn compose<A, B, C, F>(
    first: impl Fn(A) -> Result<B, F>,
    second: impl Fn(B) -> Result<C, F>,
) -> impl Fn(A) -> Result<C, F> {
    move |input| first(input).and_then(&second)
}
