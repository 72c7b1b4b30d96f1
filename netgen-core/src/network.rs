//! Owned output of one generation run.

/// Directed arc of a generated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowArc {
    /// Origin node (1-based).
    pub from: usize,
    /// Destination node (1-based).
    pub to: usize,
    /// Arc capacity.
    pub capacity: i64,
    /// Arc cost.
    pub cost: i64,
}

/// Arcs in generation order plus per-node supply (positive) or demand
/// (negative).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    arcs: Vec<FlowArc>,
    supplies: Vec<i64>,
}

impl Network {
    pub(crate) fn with_capacity(nodes: usize, arcs: usize) -> Self {
        Self {
            arcs: Vec::with_capacity(arcs),
            supplies: vec![0; nodes],
        }
    }

    /// Borrow the arcs in generation order.
    #[must_use]
    pub fn arcs(&self) -> &[FlowArc] {
        &self.arcs
    }

    /// Number of arcs emitted.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.supplies.len()
    }

    /// Per-node supply, indexed from zero (index `i` is node `i + 1`).
    #[must_use]
    pub fn supplies(&self) -> &[i64] {
        &self.supplies
    }

    /// Supply of the 1-based `node`, if it exists.
    #[must_use]
    pub fn supply(&self, node: usize) -> Option<i64> {
        node.checked_sub(1)
            .and_then(|index| self.supplies.get(index))
            .copied()
    }

    /// Sum of all supplies and demands; zero for a balanced network.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.supplies.iter().sum()
    }

    /// Decompose into owned arcs and supplies.
    #[must_use]
    pub fn into_parts(self) -> (Vec<FlowArc>, Vec<i64>) {
        (self.arcs, self.supplies)
    }

    pub(crate) fn push_arc(&mut self, from: usize, to: usize, cost: i64, capacity: i64) {
        self.arcs.push(FlowArc {
            from,
            to,
            capacity,
            cost,
        });
    }

    /// Mutable access to the 0-based supply slot.
    pub(crate) fn supply_mut(&mut self, index: usize) -> &mut i64 {
        &mut self.supplies[index]
    }

    /// Supply at the 0-based slot.
    pub(crate) fn supply_at(&self, index: usize) -> i64 {
        self.supplies[index]
    }

    pub(crate) fn supplies_mut(&mut self) -> &mut [i64] {
        &mut self.supplies
    }
}
