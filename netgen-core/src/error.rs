//! Error types for the NETGEN core library.
//!
//! Defines error enums exposed by the public API, their stable codes, and a
//! convenient result alias. Generation failures also map onto the legacy
//! negative status values returned by the historical generator.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::IndexSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum IndexSetError {
    /// Requested position was outside `[1, size]`.
    #[error("position {position} is outside the {size} remaining members")]
    OutOfRange {
        /// The 1-based position supplied by the caller.
        position: usize,
        /// Exact remaining count at the time of the call.
        size: usize,
    },
    /// The value was never a member or has already been retired.
    #[error("value {value} is not present in the index set")]
    NotPresent {
        /// The value the caller attempted to retire.
        value: usize,
    },
    /// Backing storage for the set could not be reserved.
    #[error("failed to reserve storage for {len} index set members")]
    AllocationFailure {
        /// Number of members the set was asked to hold.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`IndexSetError`] variants.
    enum IndexSetErrorCode for IndexSetError {
        /// Requested position was outside `[1, size]`.
        OutOfRange => OutOfRange { .. } => "INDEX_SET_OUT_OF_RANGE",
        /// The value was never a member or has already been retired.
        NotPresent => NotPresent { .. } => "INDEX_SET_NOT_PRESENT",
        /// Backing storage for the set could not be reserved.
        AllocationFailure => AllocationFailure { .. } => "INDEX_SET_ALLOCATION_FAILURE",
    }
}

/// Parameter rule violated by a [`crate::GenerationParams`] value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParamRule {
    /// `0 < nodes <= density`.
    NodesWithinDensity,
    /// `sources > 0`.
    PositiveSources,
    /// `sinks > 0`.
    PositiveSinks,
    /// `sources + sinks <= nodes`.
    EndpointsWithinNodes,
    /// `min_cost <= max_cost`.
    CostRange,
    /// `supply >= sources`.
    SupplyCoversSources,
    /// `0 <= transshipment_sources <= sources`.
    TransshipmentSources,
    /// `0 <= transshipment_sinks <= sinks`.
    TransshipmentSinks,
    /// `0 <= hi_cost_percent <= 100`.
    HiCostPercent,
    /// `0 <= capacitated_percent <= 100`.
    CapacitatedPercent,
    /// `min_capacity <= max_capacity`.
    CapacityRange,
}

impl ParamRule {
    /// Human-readable statement of the rule.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NodesWithinDensity => "node count must be positive and at most the arc count",
            Self::PositiveSources => "source count must be positive",
            Self::PositiveSinks => "sink count must be positive",
            Self::EndpointsWithinNodes => "sources plus sinks must not exceed the node count",
            Self::CostRange => "minimum cost must not exceed maximum cost",
            Self::SupplyCoversSources => "total supply must be at least the source count",
            Self::TransshipmentSources => {
                "transshipment sources must be between zero and the source count"
            }
            Self::TransshipmentSinks => {
                "transshipment sinks must be between zero and the sink count"
            }
            Self::HiCostPercent => "max-cost percentage must be within [0, 100]",
            Self::CapacitatedPercent => "capacitated percentage must be within [0, 100]",
            Self::CapacityRange => "minimum capacity must not exceed maximum capacity",
        }
    }
}

impl fmt::Display for ParamRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Error type produced by [`crate::Generator::generate`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetgenError {
    /// The random seed must be strictly positive.
    #[error("NETGEN requires a positive random seed (got {seed})")]
    BadSeed {
        /// The rejected seed.
        seed: i64,
    },
    /// The request exceeds the configured storage bounds.
    #[error(
        "problem too large for generator: {nodes} nodes / {arcs} arcs exceeds {max_nodes} / {max_arcs}"
    )]
    TooBig {
        /// Requested node count.
        nodes: i64,
        /// Requested arc count.
        arcs: i64,
        /// Configured node ceiling.
        max_nodes: usize,
        /// Configured arc ceiling.
        max_arcs: usize,
    },
    /// The parameters are inconsistent.
    #[error("inconsistent parameter settings: {rule}")]
    BadParms {
        /// First rule that failed, in validation order.
        rule: ParamRule,
    },
    /// An index set could not reserve its working storage.
    #[error("memory allocation failure: {source}")]
    AllocationFailure {
        /// Underlying index set failure.
        #[source]
        source: IndexSetError,
    },
    /// An index set operation failed while building the network.
    #[error("index set operation failed during generation: {source}")]
    IndexSet {
        /// Underlying index set failure.
        #[source]
        source: IndexSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetgenError`] variants.
    enum NetgenErrorCode for NetgenError {
        /// The random seed must be strictly positive.
        BadSeed => BadSeed { .. } => "NETGEN_BAD_SEED",
        /// The request exceeds the configured storage bounds.
        TooBig => TooBig { .. } => "NETGEN_TOO_BIG",
        /// The parameters are inconsistent.
        BadParms => BadParms { .. } => "NETGEN_BAD_PARMS",
        /// An index set could not reserve its working storage.
        AllocationFailure => AllocationFailure { .. } => "NETGEN_ALLOCATION_FAILURE",
        /// An index set operation failed while building the network.
        IndexSet => IndexSet { .. } => "NETGEN_INDEX_SET_FAILURE",
    }
}

impl NetgenError {
    /// Legacy numeric status of the historical generator.
    ///
    /// Index set failures other than allocation have no historical
    /// counterpart and report as internal errors (`-5`).
    ///
    /// # Examples
    /// ```
    /// use netgen_core::NetgenError;
    ///
    /// assert_eq!(NetgenError::BadSeed { seed: 0 }.status(), -1);
    /// ```
    #[must_use]
    pub const fn status(&self) -> i64 {
        match self {
            Self::BadSeed { .. } => -1,
            Self::TooBig { .. } => -2,
            Self::BadParms { .. } => -3,
            Self::AllocationFailure { .. } => -4,
            Self::IndexSet { .. } => -5,
        }
    }

    /// Retrieve the inner [`IndexSetErrorCode`] when the error originated in
    /// an [`crate::IndexSet`].
    pub const fn index_set_code(&self) -> Option<IndexSetErrorCode> {
        match self {
            Self::AllocationFailure { source } | Self::IndexSet { source } => Some(source.code()),
            _ => None,
        }
    }
}

impl From<IndexSetError> for NetgenError {
    fn from(source: IndexSetError) -> Self {
        match source {
            IndexSetError::AllocationFailure { .. } => Self::AllocationFailure { source },
            other => Self::IndexSet { source: other },
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetgenError>;
