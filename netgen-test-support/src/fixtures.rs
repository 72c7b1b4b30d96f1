//! Canonical parameter sets in the historical thirteen-value order:
//! nodes, sources, sinks, density, min cost, max cost, supply, transshipment
//! sources, transshipment sinks, max-cost percent, capacitated percent, min
//! capacity, max capacity.

/// Small minimum-cost flow instance used as the reproducibility reference
/// with seed [`REFERENCE_SEED`].
pub const MIN_COST_FLOW: [i64; 13] = [10, 2, 2, 15, 1, 10, 50, 0, 0, 50, 50, 1, 20];

/// Seed paired with [`MIN_COST_FLOW`].
pub const REFERENCE_SEED: i64 = 17;

/// Pure assignment: equal halves, unit supply per source.
pub const ASSIGNMENT: [i64; 13] = [20, 10, 10, 80, 1, 50, 10, 0, 0, 0, 0, 1, 1];

/// Unit-cost network written as a maximum-flow problem.
pub const MAX_FLOW: [i64; 13] = [40, 1, 1, 200, 1, 1, 500, 0, 0, 0, 100, 10, 120];

/// Transshipment network with transshipment sources and sinks.
pub const TRANSSHIPMENT: [i64; 13] = [60, 6, 8, 600, 1, 100, 400, 2, 3, 25, 60, 10, 200];

/// Benchmark-scale minimum-cost flow instance.
pub const LARGE_MIN_COST_FLOW: [i64; 13] =
    [5_000, 50, 50, 40_000, 1, 1_000, 100_000, 10, 10, 20, 80, 100, 5_000];

/// Renders `parms` as one whitespace-separated input record prefixed with
/// `seed` and `problem`.
///
/// # Examples
/// ```
/// use netgen_test_support::fixtures::{MIN_COST_FLOW, record};
///
/// assert_eq!(
///     record(17, 1, &MIN_COST_FLOW),
///     "17 1 10 2 2 15 1 10 50 0 0 50 50 1 20"
/// );
/// ```
#[must_use]
pub fn record(seed: i64, problem: i64, parms: &[i64; 13]) -> String {
    std::iter::once(seed)
        .chain(std::iter::once(problem))
        .chain(parms.iter().copied())
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
