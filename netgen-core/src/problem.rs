//! Problem classification.
//!
//! [`ProblemClass`] decides which construction path the generator takes;
//! [`DimacsFormat`] decides which DIMACS dialect a generated network is
//! written in.

use crate::params::GenerationParams;

/// Construction path selected for a parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemClass {
    /// Pure assignment: equal, transshipment-free halves with unit supply.
    Assignment,
    /// Transportation, transshipment, maximum-flow or minimum-cost flow.
    General,
}

impl ProblemClass {
    /// Classifies `params`.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{GenerationParams, ProblemClass};
    ///
    /// let assignment = GenerationParams::from_array([8, 4, 4, 20, 1, 9, 4, 0, 0, 0, 0, 1, 1]);
    /// assert_eq!(ProblemClass::classify(&assignment), ProblemClass::Assignment);
    ///
    /// let transport = GenerationParams::from_array([8, 4, 4, 20, 1, 9, 40, 0, 0, 0, 0, 1, 1]);
    /// assert_eq!(ProblemClass::classify(&transport), ProblemClass::General);
    /// ```
    #[must_use]
    pub const fn classify(params: &GenerationParams) -> Self {
        let pure_sources = params.sources - params.transshipment_sources;
        let pure_sinks = params.sinks - params.transshipment_sinks;
        if pure_sources + pure_sinks == params.nodes
            && pure_sources == pure_sinks
            && params.supply == params.sources
        {
            Self::Assignment
        } else {
            Self::General
        }
    }
}

/// DIMACS problem dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimacsFormat {
    /// `p asn`: assignment problem with arc costs.
    Assignment,
    /// `p max`: maximum flow with arc capacities.
    MaxFlow,
    /// `p min`: minimum-cost flow with supplies, capacities and costs.
    MinCostFlow,
}

impl DimacsFormat {
    /// Picks the dialect the historical front end used for `params`.
    ///
    /// Assignment problems win; otherwise unit costs mean maximum flow.
    #[must_use]
    pub const fn for_params(params: &GenerationParams) -> Self {
        match ProblemClass::classify(params) {
            ProblemClass::Assignment => Self::Assignment,
            ProblemClass::General if params.min_cost == 1 && params.max_cost == 1 => Self::MaxFlow,
            ProblemClass::General => Self::MinCostFlow,
        }
    }

    /// Problem designator used on the `p` line.
    #[must_use]
    pub const fn designator(self) -> &'static str {
        match self {
            Self::Assignment => "asn",
            Self::MaxFlow => "max",
            Self::MinCostFlow => "min",
        }
    }

    /// Banner used in the comment header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Assignment => "Assignment",
            Self::MaxFlow => "Maximum flow",
            Self::MinCostFlow => "Minimum cost flow",
        }
    }
}
