//! Rubbish arcs: random extra arcs that pad the network towards the
//! requested density.

use tracing::{debug, trace};

use super::Run;
use crate::index_set::IndexSet;

impl Run {
    /// Adds a random fan-out of arcs from `tail` to members of
    /// `destinations`.
    ///
    /// The remaining arc budget is shared among the tails still to come; a
    /// tail adds nothing when fewer than two arcs per remaining tail are
    /// left. Heads are drawn in proportion to their remaining selection
    /// budget, so repeated heads are possible but increasingly unlikely.
    pub(super) fn scatter(&mut self, destinations: &mut IndexSet, tail: usize) {
        let non_sources = self.shape.non_sources() as i64;
        let density = self.params.density;
        let remaining = density - self.network.arc_count() as i64;
        self.nodes_left -= 1;
        let nodes_left = self.nodes_left;
        if 2 * nodes_left >= remaining {
            return;
        }

        let weighted = destinations.weighted_size() as i64;
        let dense = (remaining + non_sources - weighted - 1) / (nodes_left + 1) >= non_sources - 1;
        let limit = if dense {
            non_sources
        } else {
            self.draw_limit(remaining, nodes_left, non_sources)
        };
        trace!(tail, limit, remaining, nodes_left, "scattering rubbish arcs");

        let (min_capacity, max_capacity) = (self.params.min_capacity, self.params.max_capacity);
        for _ in 0..limit {
            let position = self.rng.draw_position(destinations.weighted_size());
            let head = destinations.pick_weighted(position);
            let capacity = self.capacity_with(self.params.supply, |run| {
                run.rng.draw(min_capacity, max_capacity)
            });
            if let Some(head) = head {
                let cost = self.rng.draw(self.params.min_cost, self.params.max_cost);
                if (self.network.arc_count() as i64) < density {
                    self.network.push_arc(tail, head, cost, capacity);
                }
            }
        }
    }

    /// Draws how many rubbish arcs the current tail adds, leaving enough
    /// budget for the tails still to come.
    fn draw_limit(&mut self, remaining: i64, nodes_left: i64, non_sources: i64) -> i64 {
        let upper = 2 * (remaining / (nodes_left + 1) - 1);
        let headroom = nodes_left * (non_sources - 1);
        // Every draw is at most `upper`; below this bound no draw is accepted.
        if nodes_left > 0 && upper < remaining - headroom {
            debug!(
                remaining,
                nodes_left, upper, "rubbish limit unreachable, using full fan-out"
            );
            return non_sources;
        }
        loop {
            let mut limit = self.rng.draw(1, upper);
            if nodes_left == 0 {
                limit = remaining;
            }
            if headroom >= remaining - limit {
                return limit;
            }
        }
    }
}
