//! Builder utilities for configuring the generator.
//!
//! Exposes the storage ceilings checked before any generation work starts.

use crate::{
    generator::Generator,
    params::{MAX_ARCS, MAX_NODES},
};

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use netgen_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_max_nodes(500)
///     .with_max_arcs(4_000)
///     .build();
/// assert_eq!(generator.max_nodes(), 500);
/// assert_eq!(generator.max_arcs(), 4_000);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    max_nodes: usize,
    max_arcs: usize,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            max_nodes: MAX_NODES,
            max_arcs: MAX_ARCS,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with the reference ceilings.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.max_nodes(), 17_000);
    /// assert_eq!(builder.max_arcs(), 150_000);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the node ceiling.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Returns the configured node ceiling.
    #[must_use]
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Overrides the arc ceiling.
    #[must_use]
    pub fn with_max_arcs(mut self, max_arcs: usize) -> Self {
        self.max_arcs = max_arcs;
        self
    }

    /// Returns the configured arc ceiling.
    #[must_use]
    pub fn max_arcs(&self) -> usize {
        self.max_arcs
    }

    /// Constructs a [`Generator`] with the configured ceilings.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator::new(self.max_nodes, self.max_arcs)
    }
}
