use std::collections::HashSet;
use std::hash::Hash;

use crate::itemset::Itemset;

/// Self-joins a frequent level to produce the next level's candidates.
pub struct CandidateGenerator;

impl CandidateGenerator {
    /// Unions every ordered pair drawn from `level` (a set may pair with
    /// itself) and keeps exactly the unions of cardinality `target_size`,
    /// deduplicated. The output is a superset of the true frequent itemsets;
    /// the support filter prunes it afterwards.
    ///
    /// The classic Apriori refinement of also discarding candidates with an
    /// infrequent (k−1)-subset is deliberately not applied here.
    pub fn join<I>(level: &HashSet<Itemset<I>>, target_size: usize) -> HashSet<Itemset<I>>
    where
        I: Clone + Ord + Hash,
    {
        let mut candidates = HashSet::new();
        for first in level {
            for second in level {
                let joined = first.union(second);
                if joined.len() == target_size {
                    candidates.insert(joined);
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_singletons_into_pairs() {
        let level: HashSet<Itemset<String>> = ["apple", "beer", "chicken", "mango", "milk", "rice"]
            .iter()
            .map(|s| Itemset::singleton(s.to_string()))
            .collect();

        let candidates = CandidateGenerator::join(&level, 2);

        // C(6, 2) unordered pairs.
        assert_eq!(candidates.len(), 15);
        assert!(candidates.contains(&set(&["beer", "rice"])));
        assert!(candidates.contains(&set(&["mango", "milk"])));
        for candidate in &candidates {
            assert_eq!(candidate.len(), 2);
        }
    }

    #[test]
    fn test_join_mixed_sizes_into_triples() {
        let level: HashSet<Itemset<String>> = [
            set(&["apple", "beer"]),
            set(&["beer"]),
            set(&["chicken"]),
            set(&["mango"]),
            set(&["milk"]),
            set(&["rice"]),
        ]
        .into_iter()
        .collect();

        let candidates = CandidateGenerator::join(&level, 3);

        let expected: HashSet<Itemset<String>> = [
            set(&["beer", "mango", "apple"]),
            set(&["beer", "apple", "chicken"]),
            set(&["beer", "apple", "milk"]),
            set(&["beer", "rice", "apple"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_join_empty_level() {
        let level: HashSet<Itemset<String>> = HashSet::new();
        assert!(CandidateGenerator::join(&level, 2).is_empty());
    }
}
