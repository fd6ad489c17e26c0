//! Property tests for the Result combinators.
//!
//! These tests validate that:
//! - Exactly one of success / failure holds for every Result
//! - `successes` returns the success payloads in order, nothing else
//! - `on_failure_do` fires once per failure and never changes the Result
//! - `partition_results` agrees with `successes` and `failures`

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

use dojo_control::{on_failure_do, successes, ResultExt, ResultIterExt};
use proptest::prelude::*;

// ==========================================================================
// STRATEGIES
// ==========================================================================

fn result_strategy() -> impl Strategy<Value = Result<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Ok::<i64, String>),
        "[a-z]{1,8}".prop_map(Err::<i64, String>),
    ]
}

fn results_strategy() -> impl Strategy<Value = Vec<Result<i64, String>>> {
    prop::collection::vec(result_strategy(), 0..64)
}

// ==========================================================================
// PROPERTIES
// ==========================================================================

proptest! {
    #[test]
    fn exactly_one_track_is_occupied(result in result_strategy()) {
        prop_assert!(result.is_ok() != result.is_err());
    }

    #[test]
    fn successes_returns_success_payloads_in_order(results in results_strategy()) {
        let expected: Vec<i64> = results
            .iter()
            .filter_map(|r| r.as_ref().ok().copied())
            .collect();
        let success_count = results.iter().filter(|r| r.is_ok()).count();

        let found: Vec<i64> = successes(results).collect();

        prop_assert_eq!(found.len(), success_count);
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn on_failure_do_fires_once_per_failure(results in results_strategy()) {
        let mut seen: Vec<String> = Vec::new();
        let expected: Vec<String> = results
            .iter()
            .filter_map(|r| r.as_ref().err().cloned())
            .collect();

        let passed: Vec<Result<i64, String>> = results
            .clone()
            .into_iter()
            .inspect(on_failure_do(|f: &String| seen.push(f.clone())))
            .collect();

        prop_assert_eq!(passed, results);
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn on_failure_do_method_is_pass_through(result in result_strategy()) {
        let mut calls = 0_u32;
        let passed = result.clone().on_failure_do(|_| calls = calls.saturating_add(1));

        prop_assert_eq!(&passed, &result);
        prop_assert_eq!(calls, u32::from(result.is_err()));
    }

    #[test]
    fn partition_agrees_with_successes_and_failures(results in results_strategy()) {
        let (ok, err) = results.clone().into_iter().partition_results();

        prop_assert_eq!(ok, results.clone().into_iter().successes().collect::<Vec<_>>());
        prop_assert_eq!(err, results.into_iter().failures().collect::<Vec<_>>());
    }
}
