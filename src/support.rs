use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rayon::prelude::*;

use crate::error::MiningError;
use crate::itemset::{Itemset, TransactionList};

/// Cumulative occurrence counts for every itemset ever scored at any level,
/// frequent or not. Counts only grow; nothing is ever decremented.
#[derive(Debug, Clone)]
pub struct FrequencyTable<I: Ord + Hash>(HashMap<Itemset<I>, u64>);

impl<I: Ord + Hash> FrequencyTable<I> {
    pub fn new() -> Self {
        FrequencyTable(HashMap::new())
    }

    pub fn count(&self, itemset: &Itemset<I>) -> u64 {
        self.0.get(itemset).copied().unwrap_or(0)
    }

    /// support(S) = count(S) / N. Callers guarantee N > 0; the miner rejects
    /// an empty transaction list before any counting happens.
    pub fn support(&self, itemset: &Itemset<I>, transaction_count: usize) -> f64 {
        self.count(itemset) as f64 / transaction_count as f64
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, Itemset<I>, u64> {
        self.0.iter()
    }
}

impl<I: Clone + Ord + Hash> FrequencyTable<I> {
    fn add(&mut self, itemset: &Itemset<I>, occurrences: u64) {
        *self.0.entry(itemset.clone()).or_insert(0) += occurrences;
    }
}

impl<I: Ord + Hash> Default for FrequencyTable<I> {
    fn default() -> Self {
        FrequencyTable::new()
    }
}

/// Scores a candidate collection against the transaction list and keeps the
/// candidates meeting the minimum support.
///
/// Each call folds its occurrence counts into the shared [`FrequencyTable`],
/// which accumulates across every level of a run.
#[derive(Debug, Clone)]
pub struct SupportFilter {
    min_support: f64,
    parallel: bool,
}

impl SupportFilter {
    pub fn new(min_support: f64) -> Result<Self, MiningError> {
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(MiningError::Configuration(format!(
                "minimum support must be in (0, 1], got {}",
                min_support
            )));
        }
        Ok(SupportFilter {
            min_support,
            parallel: false,
        })
    }

    /// Shard the per-candidate scan across rayon workers. Counts are merged by
    /// plain summation, so the result is identical to the sequential scan.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Returns the subset of `candidates` whose support meets the threshold.
    ///
    /// The scan is the naive nested membership test over all N transactions,
    /// O(|C|·N·avg itemset size) per call.
    pub fn filter<I>(
        &self,
        candidates: &HashSet<Itemset<I>>,
        transactions: &TransactionList<I>,
        frequencies: &mut FrequencyTable<I>,
    ) -> Result<HashSet<Itemset<I>>, MiningError>
    where
        I: Clone + Ord + Hash + Sync,
    {
        if transactions.is_empty() {
            return Err(MiningError::Configuration(
                "transaction list is empty, support is undefined".to_string(),
            ));
        }
        let n = transactions.len();

        let counts: Vec<(&Itemset<I>, u64)> = if self.parallel {
            candidates
                .par_iter()
                .map(|candidate| (candidate, Self::occurrences(candidate, transactions)))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| (candidate, Self::occurrences(candidate, transactions)))
                .collect()
        };

        let mut retained = HashSet::new();
        for (candidate, local_count) in counts {
            if local_count > 0 {
                frequencies.add(candidate, local_count);
            }
            let support = local_count as f64 / n as f64;
            if support >= self.min_support {
                retained.insert(candidate.clone());
            }
        }
        Ok(retained)
    }

    fn occurrences<I: Ord>(candidate: &Itemset<I>, transactions: &TransactionList<I>) -> u64 {
        transactions
            .iter()
            .filter(|transaction| candidate.is_subset(transaction))
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn market_transactions() -> TransactionList<String> {
        TransactionList::new(vec![
            set(&["beer", "rice", "apple", "chicken"]),
            set(&["beer", "rice", "apple"]),
            set(&["beer", "apple"]),
            set(&["mango", "apple"]),
            set(&["beer", "rice", "milk", "chicken"]),
            set(&["beer", "rice", "milk"]),
            set(&["beer", "milk"]),
            set(&["mango", "milk"]),
        ])
    }

    fn base_candidates() -> HashSet<Itemset<String>> {
        ["apple", "beer", "chicken", "mango", "milk", "rice"]
            .iter()
            .map(|s| Itemset::singleton(s.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_keeps_items_with_min_support() {
        let transactions = market_transactions();
        let filter = SupportFilter::new(0.5).unwrap();
        let mut frequencies = FrequencyTable::new();

        let retained = filter
            .filter(&base_candidates(), &transactions, &mut frequencies)
            .unwrap();

        let expected: HashSet<Itemset<String>> = ["milk", "apple", "beer", "rice"]
            .iter()
            .map(|s| Itemset::singleton(s.to_string()))
            .collect();
        assert_eq!(retained, expected);

        // Infrequent candidates are still counted in the shared table.
        for (label, count) in [
            ("apple", 4),
            ("beer", 6),
            ("chicken", 2),
            ("mango", 2),
            ("milk", 4),
            ("rice", 4),
        ] {
            assert_eq!(
                frequencies.count(&Itemset::singleton(label.to_string())),
                count,
                "count for {}",
                label
            );
        }
    }

    #[test]
    fn test_frequency_table_accumulates_across_calls() {
        let transactions = market_transactions();
        let filter = SupportFilter::new(0.5).unwrap();
        let mut frequencies = FrequencyTable::new();

        filter
            .filter(&base_candidates(), &transactions, &mut frequencies)
            .unwrap();
        filter
            .filter(&base_candidates(), &transactions, &mut frequencies)
            .unwrap();

        assert_eq!(frequencies.count(&Itemset::singleton("beer".to_string())), 12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let transactions = market_transactions();
        let candidates = base_candidates();

        let mut seq_frequencies = FrequencyTable::new();
        let seq = SupportFilter::new(0.5)
            .unwrap()
            .filter(&candidates, &transactions, &mut seq_frequencies)
            .unwrap();

        let mut par_frequencies = FrequencyTable::new();
        let par = SupportFilter::new(0.5)
            .unwrap()
            .with_parallel(true)
            .filter(&candidates, &transactions, &mut par_frequencies)
            .unwrap();

        assert_eq!(seq, par);
        for (itemset, count) in seq_frequencies.iter() {
            assert_eq!(par_frequencies.count(itemset), *count);
        }
    }

    #[test]
    fn test_empty_transaction_list_is_rejected() {
        let transactions: TransactionList<String> = TransactionList::new(vec![]);
        let filter = SupportFilter::new(0.5).unwrap();
        let mut frequencies = FrequencyTable::new();

        let result = filter.filter(&base_candidates(), &transactions, &mut frequencies);
        assert!(matches!(result, Err(MiningError::Configuration(_))));
    }

    #[test]
    fn test_threshold_domain() {
        assert!(SupportFilter::new(0.0).is_err());
        assert!(SupportFilter::new(-0.1).is_err());
        assert!(SupportFilter::new(1.1).is_err());
        assert!(SupportFilter::new(1.0).is_ok());
        assert!(SupportFilter::new(f64::NAN).is_err());
    }
}
