//! Generation parameters and their validation.
//!
//! The thirteen parameters keep the historical order so callers holding the
//! raw `[i64; 13]` array can convert without remapping.

use crate::error::{NetgenError, ParamRule, Result};

/// Number of generation parameters in the historical ordering.
pub const PROBLEM_PARMS: usize = 13;

/// Default node ceiling of the reference generator.
pub const MAX_NODES: usize = 17_000;

/// Default arc ceiling of the reference generator.
pub const MAX_ARCS: usize = 150_000;

/// The thirteen NETGEN generation parameters.
///
/// # Examples
/// ```
/// use netgen_core::GenerationParams;
///
/// let params = GenerationParams::from_array([10, 2, 2, 15, 1, 10, 50, 0, 0, 50, 50, 1, 20]);
/// assert_eq!(params.nodes, 10);
/// assert_eq!(params.to_array()[12], 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenerationParams {
    /// Number of nodes.
    pub nodes: i64,
    /// Number of sources, transshipment sources included.
    pub sources: i64,
    /// Number of sinks, transshipment sinks included.
    pub sinks: i64,
    /// Requested number of arcs.
    pub density: i64,
    /// Minimum arc cost.
    pub min_cost: i64,
    /// Maximum arc cost.
    pub max_cost: i64,
    /// Total supply.
    pub supply: i64,
    /// Sources that also behave as transshipment nodes.
    pub transshipment_sources: i64,
    /// Sinks that also behave as transshipment nodes.
    pub transshipment_sinks: i64,
    /// Percent of skeleton arcs given the maximum cost.
    pub hi_cost_percent: i64,
    /// Percent of arcs to be capacitated.
    pub capacitated_percent: i64,
    /// Minimum capacity for capacitated arcs.
    pub min_capacity: i64,
    /// Maximum capacity for capacitated arcs.
    pub max_capacity: i64,
}

impl GenerationParams {
    /// Builds parameters from the historical ordered array.
    #[must_use]
    pub const fn from_array(parms: [i64; PROBLEM_PARMS]) -> Self {
        let [
            nodes,
            sources,
            sinks,
            density,
            min_cost,
            max_cost,
            supply,
            transshipment_sources,
            transshipment_sinks,
            hi_cost_percent,
            capacitated_percent,
            min_capacity,
            max_capacity,
        ] = parms;
        Self {
            nodes,
            sources,
            sinks,
            density,
            min_cost,
            max_cost,
            supply,
            transshipment_sources,
            transshipment_sinks,
            hi_cost_percent,
            capacitated_percent,
            min_capacity,
            max_capacity,
        }
    }

    /// Returns the parameters in the historical order.
    #[must_use]
    pub const fn to_array(&self) -> [i64; PROBLEM_PARMS] {
        [
            self.nodes,
            self.sources,
            self.sinks,
            self.density,
            self.min_cost,
            self.max_cost,
            self.supply,
            self.transshipment_sources,
            self.transshipment_sinks,
            self.hi_cost_percent,
            self.capacitated_percent,
            self.min_capacity,
            self.max_capacity,
        ]
    }

    /// Checks the parameter invariants, reporting the first rule violated.
    ///
    /// # Errors
    /// Returns [`NetgenError::BadParms`] naming the failed [`ParamRule`].
    pub fn check(&self) -> Result<()> {
        let rules = [
            (
                self.nodes > 0 && self.nodes <= self.density,
                ParamRule::NodesWithinDensity,
            ),
            (self.sources > 0, ParamRule::PositiveSources),
            (self.sinks > 0, ParamRule::PositiveSinks),
            (
                self.sources.saturating_add(self.sinks) <= self.nodes,
                ParamRule::EndpointsWithinNodes,
            ),
            (self.min_cost <= self.max_cost, ParamRule::CostRange),
            (self.supply >= self.sources, ParamRule::SupplyCoversSources),
            (
                (0..=self.sources).contains(&self.transshipment_sources),
                ParamRule::TransshipmentSources,
            ),
            (
                (0..=self.sinks).contains(&self.transshipment_sinks),
                ParamRule::TransshipmentSinks,
            ),
            (
                (0..=100).contains(&self.hi_cost_percent),
                ParamRule::HiCostPercent,
            ),
            (
                (0..=100).contains(&self.capacitated_percent),
                ParamRule::CapacitatedPercent,
            ),
            (
                self.min_capacity <= self.max_capacity,
                ParamRule::CapacityRange,
            ),
        ];
        match rules.into_iter().find(|(holds, _)| !holds) {
            Some((_, rule)) => Err(NetgenError::BadParms { rule }),
            None => Ok(()),
        }
    }
}

impl From<[i64; PROBLEM_PARMS]> for GenerationParams {
    fn from(parms: [i64; PROBLEM_PARMS]) -> Self {
        Self::from_array(parms)
    }
}

/// Node layout derived from validated parameters.
///
/// Nodes are 1-based: sources occupy `[1, sources]`, sinks occupy
/// `[nodes - sinks + 1, nodes]`, and transshipment nodes sit between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Shape {
    pub(crate) nodes: usize,
    pub(crate) sources: usize,
    pub(crate) sinks: usize,
    pub(crate) transshipment_sources: usize,
    pub(crate) transshipment_sinks: usize,
}

impl Shape {
    /// Converts checked parameters into unsigned counts.
    pub(crate) fn of(params: &GenerationParams) -> Result<Self> {
        let count = |value: i64, rule: ParamRule| {
            usize::try_from(value).map_err(|_| NetgenError::BadParms { rule })
        };
        Ok(Self {
            nodes: count(params.nodes, ParamRule::NodesWithinDensity)?,
            sources: count(params.sources, ParamRule::PositiveSources)?,
            sinks: count(params.sinks, ParamRule::PositiveSinks)?,
            transshipment_sources: count(
                params.transshipment_sources,
                ParamRule::TransshipmentSources,
            )?,
            transshipment_sinks: count(params.transshipment_sinks, ParamRule::TransshipmentSinks)?,
        })
    }

    /// Number of pure transshipment nodes between sources and sinks.
    pub(crate) const fn transshipment(&self) -> usize {
        self.nodes - self.sources - self.sinks
    }

    /// First node that may receive rubbish arcs.
    pub(crate) const fn first_destination(&self) -> usize {
        self.sources - self.transshipment_sources + 1
    }

    /// Nodes that may receive rubbish arcs.
    pub(crate) const fn non_sources(&self) -> usize {
        self.nodes - self.sources + self.transshipment_sources
    }
}
