use std::collections::BTreeSet;

use serde::Serialize;

/// A set of unique items; its size is the "level" of the itemset.
///
/// Backed by a `BTreeSet` so iteration, hashing and equality all follow the
/// canonical sorted order of the item type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Itemset<I: Ord>(BTreeSet<I>);

impl<I: Ord> Itemset<I> {
    pub fn singleton(item: I) -> Self {
        Itemset(BTreeSet::from_iter([item]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.contains(item)
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, I> {
        self.0.iter()
    }
}

impl<I: Clone + Ord> Itemset<I> {
    pub fn union(&self, other: &Self) -> Self {
        Itemset(self.0.union(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &Self) -> Self {
        Itemset(self.0.difference(&other.0).cloned().collect())
    }

    /// Items in canonical (sorted) order.
    pub fn to_vec(&self) -> Vec<I> {
        self.0.iter().cloned().collect()
    }

    /// Every non-empty proper subset, in no particular order.
    ///
    /// A singleton (or empty) itemset has none. There are 2^n − 2 of them, so
    /// callers only invoke this on mined itemsets, which are small.
    pub fn proper_subsets(&self) -> Vec<Itemset<I>> {
        let items: Vec<&I> = self.0.iter().collect();
        let n = items.len();
        let mut subsets = Vec::new();
        if n < 2 {
            return subsets;
        }
        for mask in 1u64..((1u64 << n) - 1) {
            let subset = items
                .iter()
                .enumerate()
                .filter(|(idx, _)| mask & (1 << idx) != 0)
                .map(|(_, item)| (*item).clone())
                .collect();
            subsets.push(Itemset(subset));
        }
        subsets
    }
}

impl<I: Ord> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Itemset(iter.into_iter().collect())
    }
}

/// An ordered, fixed-length sequence of transactions, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionList<I: Ord>(Vec<Itemset<I>>);

impl<I: Ord> TransactionList<I> {
    pub fn new(transactions: Vec<Itemset<I>>) -> Self {
        TransactionList(transactions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Itemset<I>> {
        self.0.iter()
    }
}
