//! Generator driver.
//!
//! Validates a parameter set, classifies it, and runs either the assignment
//! path or the general path against an owned [`Network`] and
//! [`RandomStream`]. Every randomised choice is a draw on the run's stream,
//! and draws are issued in the historical order so a seed reproduces the
//! reference network.

mod assignment;
mod rubbish;
mod skeleton;
mod supply;

use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    error::{IndexSetError, NetgenError},
    index_set::IndexSet,
    network::Network,
    params::{GenerationParams, Shape},
    problem::ProblemClass,
    random::RandomStream,
};

/// Validating network generator with configurable storage ceilings.
///
/// # Examples
/// ```
/// use netgen_core::{GenerationParams, Generator};
///
/// let params = GenerationParams::from_array([10, 2, 2, 15, 1, 10, 50, 0, 0, 50, 50, 1, 20]);
/// let network = Generator::default().generate(17, &params).expect("parameters are valid");
/// assert!(network.arc_count() <= 15);
/// assert_eq!(network.balance(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    max_nodes: usize,
    max_arcs: usize,
}

impl Default for Generator {
    fn default() -> Self {
        crate::builder::GeneratorBuilder::new().build()
    }
}

impl Generator {
    pub(crate) const fn new(max_nodes: usize, max_arcs: usize) -> Self {
        Self {
            max_nodes,
            max_arcs,
        }
    }

    /// Node ceiling enforced by [`Generator::generate`].
    #[must_use]
    pub const fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Arc ceiling enforced by [`Generator::generate`].
    #[must_use]
    pub const fn max_arcs(&self) -> usize {
        self.max_arcs
    }

    /// Generates the network described by `seed` and `params`.
    ///
    /// # Errors
    /// Returns [`NetgenError::BadSeed`] for a non-positive seed,
    /// [`NetgenError::TooBig`] when the node or arc count exceeds the
    /// ceilings, [`NetgenError::BadParms`] when the parameters are
    /// inconsistent, and [`NetgenError::AllocationFailure`] when an index set
    /// cannot reserve storage. Validation errors are reported before any
    /// generation work.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, params),
        fields(
            seed = seed,
            nodes = params.nodes,
            density = params.density,
            class = field::Empty,
            arcs = field::Empty
        ),
    )]
    pub fn generate(&self, seed: i64, params: &GenerationParams) -> Result<Network> {
        let shape = self.validate(seed, params)?;
        let class = ProblemClass::classify(params);
        let span = Span::current();
        span.record("class", field::debug(class));

        let mut run = Run::new(seed, *params, shape);
        match class {
            ProblemClass::Assignment => run.assignment_path()?,
            ProblemClass::General => run.general_path()?,
        }

        let network = run.network;
        span.record("arcs", network.arc_count());
        info!(
            arcs = network.arc_count(),
            requested = params.density,
            "network generated"
        );
        Ok(network)
    }

    fn validate(&self, seed: i64, params: &GenerationParams) -> Result<Shape> {
        if seed <= 0 {
            return Err(NetgenError::BadSeed { seed });
        }
        let max_nodes = i64::try_from(self.max_nodes).unwrap_or(i64::MAX);
        let max_arcs = i64::try_from(self.max_arcs).unwrap_or(i64::MAX);
        if params.nodes > max_nodes || params.density > max_arcs {
            return Err(NetgenError::TooBig {
                nodes: params.nodes,
                arcs: params.density,
                max_nodes: self.max_nodes,
                max_arcs: self.max_arcs,
            });
        }
        params.check()?;
        Shape::of(params)
    }
}

/// Generates `params` with the reference storage ceilings.
///
/// # Errors
/// See [`Generator::generate`].
///
/// # Examples
/// ```
/// use netgen_core::{GenerationParams, NetgenError, generate};
///
/// let params = GenerationParams::from_array([10, 2, 2, 15, 1, 10, 50, 0, 0, 50, 50, 1, 20]);
/// let err = generate(0, &params).expect_err("seed must be positive");
/// assert_eq!(err.status(), -1);
/// ```
pub fn generate(seed: i64, params: &GenerationParams) -> Result<Network> {
    Generator::default().generate(seed, params)
}

/// Mutable state of a single generation run.
struct Run {
    params: GenerationParams,
    shape: Shape,
    rng: RandomStream,
    network: Network,
    /// Tails still expected to receive rubbish arcs.
    nodes_left: i64,
}

impl Run {
    fn new(seed: i64, params: GenerationParams, shape: Shape) -> Self {
        let arcs = usize::try_from(params.density).unwrap_or_default();
        Self {
            params,
            shape,
            rng: RandomStream::new(seed),
            network: Network::with_capacity(shape.nodes, arcs),
            nodes_left: params.nodes - params.sinks + params.transshipment_sinks,
        }
    }

    /// Fresh destination set covering every node that may receive rubbish
    /// arcs.
    fn destinations(&self) -> Result<IndexSet> {
        Ok(IndexSet::new(
            self.shape.first_destination(),
            self.shape.nodes,
        )?)
    }

    /// Capacity for an arc: `uncapacitated` unless the capacitated coin flip
    /// succeeds, in which case `capacitated` supplies the value.
    fn capacity_with(
        &mut self,
        uncapacitated: i64,
        capacitated: impl FnOnce(&mut Self) -> i64,
    ) -> i64 {
        if self.rng.draw(1, 100) <= self.params.capacitated_percent {
            capacitated(self)
        } else {
            uncapacitated
        }
    }
}

/// Removes `node` from `set` when present.
///
/// Tails and heads outside the destination range are expected here, so a
/// missing member is not an error.
fn exclude(set: &mut IndexSet, node: usize) {
    if let Err(IndexSetError::NotPresent { value }) = set.retire(node) {
        tracing::trace!(node = value, "node outside destination set");
    }
}
