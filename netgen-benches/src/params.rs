//! Benchmark parameter types.

use std::fmt;

use netgen_core::GenerationParams;

/// Shape of a minimum-cost-flow workload.
#[derive(Clone, Copy, Debug)]
pub struct NetworkBenchParams {
    /// Number of nodes.
    pub nodes: i64,
    /// Number of sources.
    pub sources: i64,
    /// Number of sinks.
    pub sinks: i64,
    /// Requested arc count.
    pub density: i64,
}

impl NetworkBenchParams {
    /// Expands the shape into full generation parameters.
    ///
    /// Supply scales with the node count; costs and capacities use fixed
    /// ranges so timings compare across shapes.
    #[must_use]
    pub const fn to_generation_params(self) -> GenerationParams {
        GenerationParams {
            nodes: self.nodes,
            sources: self.sources,
            sinks: self.sinks,
            density: self.density,
            min_cost: 1,
            max_cost: 1_000,
            supply: self.nodes.saturating_mul(10),
            transshipment_sources: 0,
            transshipment_sinks: 0,
            hi_cost_percent: 20,
            capacitated_percent: 80,
            min_capacity: 100,
            max_capacity: 5_000,
        }
    }
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},s={},t={},m={}",
            self.nodes, self.sources, self.sinks, self.density
        )
    }
}

/// Parameters for an index set sampling run.
#[derive(Clone, Copy, Debug)]
pub struct IndexSetBenchParams {
    /// Number of members in the fresh set.
    pub members: usize,
    /// Weighted picks drawn per iteration.
    pub picks: usize,
}

impl fmt::Display for IndexSetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "members={},picks={}", self.members, self.picks)
    }
}
