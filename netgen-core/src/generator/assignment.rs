//! Assignment path: a random perfect matching plus rubbish arcs.

use tracing::{debug, instrument};

use super::{Run, exclude};
use crate::{Result, index_set::IndexSet};

impl Run {
    /// Gives the first half of the nodes unit supply and the second half unit
    /// demand, matches every source to a distinct partner, and scatters
    /// rubbish arcs from each source.
    #[instrument(
        name = "core.assignment_path",
        err,
        skip(self),
        fields(nodes = self.shape.nodes),
    )]
    pub(super) fn assignment_path(&mut self) -> Result<()> {
        let nodes = self.shape.nodes;
        let half = nodes / 2;
        for (index, supply) in self.network.supplies_mut().iter_mut().enumerate() {
            *supply = if index < half { 1 } else { -1 };
        }

        let first_partner = self.shape.sources + 1;
        let mut partners = IndexSet::new(first_partner, nodes)?;
        for source in 1..=half {
            let partner = partners.take(self.rng.draw_position(partners.size()))?;
            let cost = self.rng.draw(self.params.min_cost, self.params.max_cost);
            self.network.push_arc(source, partner, cost, 1);

            let mut destinations = IndexSet::new(first_partner, nodes)?;
            exclude(&mut destinations, partner);
            self.scatter(&mut destinations, source);
        }
        debug!(pairs = half, "assignment matching built");
        Ok(())
    }
}
