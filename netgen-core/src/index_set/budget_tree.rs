//! Fenwick tree over per-member selection budgets.
//!
//! Supports point decrements, the running total, and "which offset covers
//! the `target`-th budget unit" queries in `O(log n)`.

use std::collections::TryReserveError;

#[derive(Clone, Debug)]
pub(super) struct BudgetTree {
    /// 1-based partial sums; slot 0 is unused.
    tree: Vec<u64>,
    total: u64,
}

impl BudgetTree {
    /// Builds a tree of `len` slots, each holding `budget`, in linear time.
    pub(super) fn uniform(len: usize, budget: u64) -> Result<Self, TryReserveError> {
        let mut tree = Vec::new();
        tree.try_reserve_exact(len + 1)?;
        tree.push(0);
        tree.extend(std::iter::repeat_n(budget, len));
        for index in 1..=len {
            let parent = index + lowest_bit(index);
            if parent <= len {
                tree[parent] += tree[index];
            }
        }
        Ok(Self {
            tree,
            total: budget * len as u64,
        })
    }

    pub(super) const fn total(&self) -> u64 {
        self.total
    }

    /// Removes `amount` units from the slot at 0-based `offset`.
    pub(super) fn decrease(&mut self, offset: usize, amount: u64) {
        if amount == 0 {
            return;
        }
        let len = self.len();
        let mut index = offset + 1;
        while index <= len {
            self.tree[index] -= amount;
            index += lowest_bit(index);
        }
        self.total -= amount;
    }

    /// Returns the 0-based offset whose budget covers unit `target`.
    ///
    /// `target` must lie in `[1, total]`.
    pub(super) fn locate(&self, target: u64) -> usize {
        let len = self.len();
        let mut position = 0;
        let mut remaining = target;
        let mut step = if len == 0 { 0 } else { 1 << len.ilog2() };
        while step > 0 {
            let next = position + step;
            if next <= len && self.tree[next] < remaining {
                position = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        position
    }

    fn len(&self) -> usize {
        self.tree.len() - 1
    }
}

const fn lowest_bit(index: usize) -> usize {
    index & index.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(1, 1, 0)]
    #[case(1, 3, 0)]
    #[case(4, 3, 1)]
    #[case(15, 3, 4)]
    fn locates_uniform_units(#[case] target: u64, #[case] budget: u64, #[case] expected: usize) {
        let tree = BudgetTree::uniform(7, budget).expect("reservation must succeed");
        assert_eq!(tree.locate(target), expected);
    }

    #[test]
    fn emptied_slots_are_skipped() {
        let mut tree = BudgetTree::uniform(5, 2).expect("reservation must succeed");
        tree.decrease(0, 2);
        tree.decrease(2, 2);
        assert_eq!(tree.total(), 6);
        assert_eq!(tree.locate(1), 1);
        assert_eq!(tree.locate(3), 3);
        assert_eq!(tree.locate(6), 4);
    }

    #[test]
    fn empty_tree_has_no_budget() {
        let tree = BudgetTree::uniform(0, 100).expect("reservation must succeed");
        assert_eq!(tree.total(), 0);
    }
}
