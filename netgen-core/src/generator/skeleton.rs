//! Feasible skeleton of the general path.
//!
//! Transshipment nodes are spliced into one chain per source, then each
//! source is wired to a random subset of sinks through its chain. Sink
//! demands are charged as the sink arcs are chosen, so every unit of source
//! supply has a path to a sink before any rubbish arc is added.

use tracing::{debug, instrument};

use super::{Run, exclude};
use crate::{Result, index_set::IndexSet};

/// Arc of a source's skeleton, before costs and capacities are assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct SkeletonArc {
    pub(super) tail: usize,
    pub(super) head: usize,
}

/// Circular predecessor links, one chain per source.
///
/// `links[source] == source` for a source whose chain is empty; otherwise
/// following `links` from a source visits its chain and returns to it.
pub(super) struct Chains {
    links: Vec<usize>,
}

impl Chains {
    fn new(nodes: usize) -> Self {
        Self {
            links: (0..=nodes).collect(),
        }
    }

    fn splice(&mut self, source: usize, node: usize) {
        self.links[node] = self.links[source];
        self.links[source] = node;
    }

    fn next(&self, node: usize) -> usize {
        self.links[node]
    }
}

impl Run {
    /// Builds the skeleton, its sink wiring and the per-tail rubbish for
    /// every source, then scatters rubbish from the transshipment sinks.
    #[instrument(
        name = "core.general_path",
        err,
        skip(self),
        fields(sources = self.shape.sources, sinks = self.shape.sinks),
    )]
    pub(super) fn general_path(&mut self) -> Result<()> {
        self.create_supply();
        let chains = self.link_chains()?;
        for source in 1..=self.shape.sources {
            let skeleton = self.attach_sinks(&chains, source)?;
            self.emit_skeleton(skeleton, source)?;
        }

        let first = self.shape.nodes - self.shape.sinks + 1;
        for sink in first..first + self.shape.transshipment_sinks {
            let mut destinations = self.destinations()?;
            exclude(&mut destinations, sink);
            self.scatter(&mut destinations, sink);
        }
        Ok(())
    }

    /// Distributes the pure transshipment nodes over the source chains.
    ///
    /// Roughly the first sixty percent are dealt round-robin so every source
    /// gets a share; the rest go to random sources.
    fn link_chains(&mut self) -> Result<Chains> {
        let sources = self.shape.sources;
        let mut chains = Chains::new(self.shape.nodes);
        let mut pending = IndexSet::new(sources + 1, self.shape.nodes - self.shape.sinks)?;

        let transshipment = self.shape.transshipment();
        let round_robin_until = (4 * transshipment + 9) / 10;
        let mut remaining = transshipment;
        let mut source = 1;
        while remaining > round_robin_until {
            let node = pending.take(self.rng.draw_position(pending.size()))?;
            chains.splice(source, node);
            source = if source == sources { 1 } else { source + 1 };
            remaining -= 1;
        }
        while remaining > 0 {
            let node = pending.take(self.rng.draw_position(pending.size()))?;
            let source = self.rng.draw_position(sources);
            chains.splice(source, node);
            remaining -= 1;
        }
        debug!(transshipment, sources, "transshipment chains linked");
        Ok(chains)
    }

    /// Collects the chain arcs of `source` and wires the chain to sinks,
    /// charging each chosen sink part of the source's supply.
    fn attach_sinks(&mut self, chains: &Chains, source: usize) -> Result<Vec<SkeletonArc>> {
        let mut skeleton = Vec::new();
        let mut node = chains.next(source);
        while node != source {
            let next = chains.next(node);
            skeleton.push(SkeletonArc {
                tail: next,
                head: node,
            });
            node = next;
        }
        let chain_length = skeleton.len();

        let sinks = self.shape.sinks;
        let target = match self.shape.transshipment() {
            0 => sinks / self.shape.sources + 1,
            transshipment => 2 * chain_length * sinks / transshipment,
        };
        let count = target.min(sinks).max(2.min(sinks));

        let first_sink = self.shape.nodes - sinks;
        let mut open = IndexSet::new(first_sink, self.shape.nodes - 1)?;
        let mut chosen = Vec::with_capacity(count);
        for _ in 0..count {
            chosen.push(open.take(self.rng.draw_position(open.size()))?);
        }
        if source == self.shape.sources {
            // The last source also picks up every sink nobody has charged.
            while !open.is_empty() {
                let slot = open.take(1)?;
                if self.network.supply_at(slot) == 0 {
                    chosen.push(slot);
                }
            }
        }

        let source_supply = self.network.supply_at(source - 1);
        let attached = chosen.len();
        let per_sink = source_supply / attached as i64;
        let mut origin = chains.next(source);
        for &slot in &chosen {
            let partial = self.rng.draw(1, per_sink);
            let other = chosen[self.rng.draw_offset(attached)];
            skeleton.push(SkeletonArc {
                tail: origin,
                head: slot + 1,
            });
            *self.network.supply_mut(slot) -= partial;
            *self.network.supply_mut(other) -= per_sink - partial;

            origin = source;
            for _ in 0..self.rng.draw(1, chain_length as i64) {
                origin = chains.next(origin);
            }
        }
        *self.network.supply_mut(chosen[0]) -= source_supply % attached as i64;

        debug!(source, chain_length, sinks = attached, "sinks attached");
        Ok(skeleton)
    }

    /// Emits the skeleton of `source` grouped by tail, following each group
    /// with rubbish arcs from the same tail.
    fn emit_skeleton(&mut self, mut skeleton: Vec<SkeletonArc>, source: usize) -> Result<()> {
        sort_by_tail(&mut skeleton);
        let supply = self.params.supply;
        let source_supply = self.network.supply_at(source - 1);
        let min_capacity = self.params.min_capacity;

        for group in skeleton.chunk_by(|a, b| a.tail == b.tail) {
            let tail = group[0].tail;
            let mut destinations = self.destinations()?;
            exclude(&mut destinations, tail);
            for arc in group {
                exclude(&mut destinations, arc.head);
                let capacity = self.capacity_with(supply, |_| source_supply.max(min_capacity));
                let cost = if self.rng.draw(1, 100) > self.params.hi_cost_percent {
                    self.rng.draw(self.params.min_cost, self.params.max_cost)
                } else {
                    self.params.max_cost
                };
                self.network.push_arc(tail, arc.head, cost, capacity);
            }
            self.scatter(&mut destinations, tail);
        }
        Ok(())
    }
}

/// Orders `arcs` by tail with the historical diminishing-gap insertion sort.
///
/// The sort is not stable; its exact permutation of equal tails is part of
/// the reproducible output.
pub(super) fn sort_by_tail(arcs: &mut [SkeletonArc]) {
    let len = arcs.len();
    let mut gap = len / 2;
    while gap > 0 {
        for start in 0..len - gap {
            let mut i = start;
            while arcs[i].tail > arcs[i + gap].tail {
                arcs.swap(i, i + gap);
                if i < gap {
                    break;
                }
                i -= gap;
            }
        }
        gap /= 2;
    }
}
