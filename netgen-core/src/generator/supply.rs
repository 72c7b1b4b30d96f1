//! Supply distribution across sources.

use super::Run;

impl Run {
    /// Spreads the total supply over the sources.
    ///
    /// Each source keeps a random share of the per-source quota and hands the
    /// rest to a random source; the division remainder lands on one more
    /// random source. The total therefore equals the requested supply.
    pub(super) fn create_supply(&mut self) {
        let sources = self.shape.sources;
        let total = self.params.supply;
        let count = self.params.sources;
        let quota = total / count;

        for index in 0..sources {
            let partial = self.rng.draw(1, quota);
            *self.network.supply_mut(index) += partial;
            let other = self.rng.draw_offset(sources);
            *self.network.supply_mut(other) += quota - partial;
        }
        let remainder = self.rng.draw_offset(sources);
        *self.network.supply_mut(remainder) += total % count;
    }
}
