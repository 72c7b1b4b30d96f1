//! Sampling-without-replacement container over a contiguous integer range.
//!
//! Members live in a dense vector with swap-to-end removal, so positional
//! picks and retirements are `O(1)`. Positions are reassigned after every
//! removal; the enumeration is stable between a [`IndexSet::size`] query and
//! the pick that follows it.
//!
//! Each member also carries a selection budget of [`FLAG_LIMIT`] units. Every
//! pick spends one unit of the picked member's budget without retiring it.
//! [`IndexSet::pick_weighted`] samples members in proportion to their
//! remaining budget, which lets callers that draw many times from the same
//! set steer away from members they have already chosen often.

mod budget_tree;

use crate::error::IndexSetError;

use self::budget_tree::BudgetTree;

/// Selection budget each member starts with.
pub const FLAG_LIMIT: u32 = 100;

const ABSENT: usize = usize::MAX;

type IndexSetResult<T> = core::result::Result<T, IndexSetError>;

/// Available integers of `[lo, hi]` plus per-member selection budgets.
///
/// # Examples
/// ```
/// use netgen_core::IndexSet;
///
/// let mut set = IndexSet::new(1, 5).expect("small sets always allocate");
/// set.retire(3).expect("3 is a member");
/// assert_eq!(set.size(), 4);
/// let first = set.take(1).expect("position 1 exists");
/// assert_ne!(first, 3);
/// assert_eq!(set.size(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct IndexSet {
    lo: usize,
    members: Vec<usize>,
    slots: Vec<usize>,
    budgets: Vec<u32>,
    weights: BudgetTree,
}

impl IndexSet {
    /// Creates a set holding every integer of `[lo, hi]`.
    ///
    /// The set is empty when `hi < lo`.
    ///
    /// # Errors
    /// Returns [`IndexSetError::AllocationFailure`] when backing storage
    /// cannot be reserved.
    pub fn new(lo: usize, hi: usize) -> IndexSetResult<Self> {
        let len = if hi < lo { 0 } else { hi - lo + 1 };
        let failure = |_| IndexSetError::AllocationFailure { len };

        let mut members = Vec::new();
        members.try_reserve_exact(len).map_err(failure)?;
        members.extend(lo..lo + len);

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(failure)?;
        slots.extend(0..len);

        let mut budgets = Vec::new();
        budgets.try_reserve_exact(len).map_err(failure)?;
        budgets.resize(len, FLAG_LIMIT);

        let weights = BudgetTree::uniform(len, u64::from(FLAG_LIMIT)).map_err(failure)?;

        Ok(Self {
            lo,
            members,
            slots,
            budgets,
            weights,
        })
    }

    /// Exact number of members still present.
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether every member has been retired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Remaining selection budget of present members, in whole-member units.
    ///
    /// A fresh set reports its exact size. The value falls by one for every
    /// [`FLAG_LIMIT`] picks spent on present members and drops with every
    /// retirement.
    #[must_use]
    pub fn weighted_size(&self) -> usize {
        let units = self.weights.total().div_ceil(u64::from(FLAG_LIMIT));
        usize::try_from(units).unwrap_or(usize::MAX)
    }

    /// Whether `value` is still present.
    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.slot_of(value).is_some()
    }

    /// Returns the member at 1-based `position` without retiring it.
    ///
    /// The picked member's budget shrinks by one unit.
    ///
    /// # Errors
    /// Returns [`IndexSetError::OutOfRange`] when `position` is outside
    /// `[1, size]`.
    pub fn pick(&mut self, position: usize) -> IndexSetResult<usize> {
        let slot = self.slot_for_position(position)?;
        let value = self.members[slot];
        self.spend(value);
        Ok(value)
    }

    /// Returns and retires the member at 1-based `position`.
    ///
    /// # Errors
    /// Returns [`IndexSetError::OutOfRange`] when `position` is outside
    /// `[1, size]`.
    pub fn take(&mut self, position: usize) -> IndexSetResult<usize> {
        let slot = self.slot_for_position(position)?;
        let value = self.members[slot];
        self.remove_slot(slot, value);
        Ok(value)
    }

    /// Samples a member in proportion to its remaining budget.
    ///
    /// `position` is a 1-based draw from `[1, weighted_size]`. The total
    /// budget is cut into `weighted_size` equal slices and `position` selects
    /// the member owning the last unit of its slice, so a member's share of
    /// positions tracks its share of the remaining budget. Members with a
    /// spent budget are never chosen. Returns `None` for position zero and
    /// for positions past `weighted_size`. The chosen member stays present
    /// and spends one unit of budget.
    pub fn pick_weighted(&mut self, position: usize) -> Option<usize> {
        let slices = u128::try_from(self.weighted_size()).ok()?;
        let slice = u128::try_from(position)
            .ok()
            .filter(|slice| (1..=slices).contains(slice))?;
        let total = u128::from(self.weights.total());
        let target = u64::try_from((slice * total).div_ceil(slices)).ok()?;
        let value = self.lo + self.weights.locate(target);
        self.spend(value);
        Some(value)
    }

    /// Removes `value` from the set.
    ///
    /// # Errors
    /// Returns [`IndexSetError::NotPresent`] when `value` is outside the
    /// original range or has already been retired.
    pub fn retire(&mut self, value: usize) -> IndexSetResult<()> {
        let slot = self
            .slot_of(value)
            .ok_or(IndexSetError::NotPresent { value })?;
        self.remove_slot(slot, value);
        Ok(())
    }

    fn slot_for_position(&self, position: usize) -> IndexSetResult<usize> {
        if position == 0 || position > self.members.len() {
            return Err(IndexSetError::OutOfRange {
                position,
                size: self.members.len(),
            });
        }
        Ok(position - 1)
    }

    fn slot_of(&self, value: usize) -> Option<usize> {
        let offset = value.checked_sub(self.lo)?;
        self.slots.get(offset).copied().filter(|&slot| slot != ABSENT)
    }

    fn spend(&mut self, value: usize) {
        let offset = value - self.lo;
        if self.budgets[offset] > 0 {
            self.budgets[offset] -= 1;
            self.weights.decrease(offset, 1);
        }
    }

    fn remove_slot(&mut self, slot: usize, value: usize) {
        self.members.swap_remove(slot);
        if let Some(&moved) = self.members.get(slot) {
            self.slots[moved - self.lo] = slot;
        }
        let offset = value - self.lo;
        self.slots[offset] = ABSENT;
        self.weights.decrease(offset, u64::from(self.budgets[offset]));
        self.budgets[offset] = 0;
    }
}
