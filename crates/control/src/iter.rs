//! Combinators over sequences of Results.

use std::iter::FilterMap;

use itertools::Itertools;

/// Lazy iterator over the success payloads of a Result sequence.
pub type Successes<I, S, F> = FilterMap<I, fn(Result<S, F>) -> Option<S>>;

/// Lazy iterator over the failure payloads of a Result sequence.
pub type Failures<I, S, F> = FilterMap<I, fn(Result<S, F>) -> Option<F>>;

/// Extension trait for any iterator yielding Results.
pub trait ResultIterExt<S, F>: Iterator<Item = Result<S, F>> + Sized {
    /// Unwrapped success values, failures discarded, order preserved.
    fn successes(self) -> Successes<Self, S, F> {
        self.filter_map(Result::ok as fn(Result<S, F>) -> Option<S>)
    }

    /// Unwrapped failure values, successes discarded, order preserved.
    fn failures(self) -> Failures<Self, S, F> {
        self.filter_map(Result::err as fn(Result<S, F>) -> Option<F>)
    }

    /// Split eagerly into `(successes, failures)`.
    fn partition_results(self) -> (Vec<S>, Vec<F>) {
        self.partition_result()
    }
}

impl<I, S, F> ResultIterExt<S, F> for I where I: Iterator<Item = Result<S, F>> {}

/// Free-function form of [`ResultIterExt::successes`].
pub fn successes<I, S, F>(results: I) -> Successes<I::IntoIter, S, F>
where
    I: IntoIterator<Item = Result<S, F>>,
{
    results.into_iter().successes()
}

/// Free-function form of [`ResultIterExt::failures`].
pub fn failures<I, S, F>(results: I) -> Failures<I::IntoIter, S, F>
where
    I: IntoIterator<Item = Result<S, F>>,
{
    results.into_iter().failures()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn mixed() -> Vec<Result<i32, &'static str>> {
        vec![Ok(1), Err("a"), Ok(2), Ok(3), Err("b")]
    }

    #[test]
    fn test_successes_keeps_order() {
        let found: Vec<i32> = successes(mixed()).collect();
        assert_eq!(found, vec![1, 2, 3]);
    }

    #[test]
    fn test_failures_keeps_order() {
        let found: Vec<&str> = mixed().into_iter().failures().collect();
        assert_eq!(found, vec!["a", "b"]);
    }

    #[test]
    fn test_successes_of_empty_sequence() {
        let empty: Vec<Result<i32, &str>> = Vec::new();
        assert_eq!(successes(empty).count(), 0);
    }

    #[test]
    fn test_partition_results() {
        let (ok, err) = mixed().into_iter().partition_results();
        assert_eq!(ok, vec![1, 2, 3]);
        assert_eq!(err, vec!["a", "b"]);
    }

    #[test]
    fn test_successes_is_lazy() {
        let pulled = Cell::new(0_usize);
        let source = mixed().into_iter().inspect(|_| pulled.set(pulled.get().saturating_add(1)));

        let mut found = source.successes();
        assert_eq!(pulled.get(), 0);
        assert_eq!(found.next(), Some(1));
        assert_eq!(pulled.get(), 1);
    }
}
