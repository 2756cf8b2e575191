use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::candidates::CandidateGenerator;
use crate::error::MiningError;
use crate::index::TransactionIndex;
use crate::itemset::Itemset;
use crate::support::{FrequencyTable, SupportFilter};

/// Level k → the frequent k-itemsets of that level. Entries are written once
/// per non-empty level and never touched again.
pub type LevelMap<I> = BTreeMap<usize, HashSet<Itemset<I>>>;

/// Mining configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Minimum support threshold, in (0, 1].
    pub min_support: f64,
    /// Shard the support scan across rayon workers.
    pub parallel: bool,
    /// Collect per-phase timings and counters.
    pub collect_stats: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 0.15,
            parallel: false,
            collect_stats: false,
        }
    }
}

/// Timings and counters for one mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningStats {
    pub total_duration: Duration,
    pub counting_duration: Duration,
    pub join_duration: Duration,
    pub levels: usize,
    pub candidates_scored: usize,
    pub frequent_itemsets: usize,
}

/// Everything the level-wise search produced: the per-level frequent itemsets
/// and the cumulative frequency table covering every itemset ever scored.
#[derive(Debug, Clone)]
pub struct MiningResult<I: Ord + Hash> {
    pub levels: LevelMap<I>,
    pub frequencies: FrequencyTable<I>,
    pub transaction_count: usize,
    pub stats: Option<MiningStats>,
}

impl<I: Ord + Hash> MiningResult<I> {
    pub fn support(&self, itemset: &Itemset<I>) -> f64 {
        self.frequencies.support(itemset, self.transaction_count)
    }

    pub fn frequent_itemsets(&self) -> impl Iterator<Item = &Itemset<I>> {
        self.levels.values().flatten()
    }
}

impl<I: Clone + Ord + Hash> MiningResult<I> {
    /// Flattens the level map into (canonically ordered item tuple, support)
    /// pairs, in no particular order.
    pub fn items(&self) -> Vec<(Vec<I>, f64)> {
        self.frequent_itemsets()
            .map(|itemset| (itemset.to_vec(), self.support(itemset)))
            .collect()
    }
}

/// Drives the level-wise generate → filter loop until a level yields nothing.
///
/// Termination rests on support monotonicity: no superset of an infrequent
/// itemset can be frequent, so once a filtered level comes back empty the
/// search is exhaustive over all frequent itemsets.
#[derive(Debug, Clone)]
pub struct FrequentItemsetMiner {
    config: MinerConfig,
}

impl FrequentItemsetMiner {
    pub fn new(config: MinerConfig) -> Result<Self, MiningError> {
        // SupportFilter owns the threshold domain check.
        SupportFilter::new(config.min_support)?;
        Ok(FrequentItemsetMiner { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    pub fn mine<I>(&self, index: TransactionIndex<I>) -> Result<MiningResult<I>, MiningError>
    where
        I: Clone + Ord + Hash + Sync,
    {
        let start_time = Instant::now();
        let (base, transactions) = index.into_parts();
        if transactions.is_empty() {
            return Err(MiningError::Configuration(
                "transaction list is empty, nothing to mine".to_string(),
            ));
        }
        info!(
            "Starting level-wise search over {} transactions, {} base candidates",
            transactions.len(),
            base.len()
        );

        let filter =
            SupportFilter::new(self.config.min_support)?.with_parallel(self.config.parallel);
        let mut frequencies = FrequencyTable::new();
        let mut levels = LevelMap::new();

        let mut counting_duration = Duration::ZERO;
        let mut join_duration = Duration::ZERO;
        let mut candidates_scored = base.len();

        let counting_start = Instant::now();
        let mut current = filter.filter(&base, &transactions, &mut frequencies)?;
        counting_duration += counting_start.elapsed();

        let mut k = 1;
        while !current.is_empty() {
            debug!("Level {}: {} frequent itemsets", k, current.len());

            let join_start = Instant::now();
            let candidates = CandidateGenerator::join(&current, k + 1);
            join_duration += join_start.elapsed();
            candidates_scored += candidates.len();

            levels.insert(k, current);

            let counting_start = Instant::now();
            current = filter.filter(&candidates, &transactions, &mut frequencies)?;
            counting_duration += counting_start.elapsed();
            k += 1;
        }

        let frequent_itemsets: usize = levels.values().map(HashSet::len).sum();
        let total_duration = start_time.elapsed();
        info!(
            "Mining completed in {:?}: {} frequent itemsets across {} levels",
            total_duration,
            frequent_itemsets,
            levels.len()
        );

        let stats = if self.config.collect_stats {
            Some(MiningStats {
                total_duration,
                counting_duration,
                join_duration,
                levels: levels.len(),
                candidates_scored,
                frequent_itemsets,
            })
        } else {
            None
        };

        Ok(MiningResult {
            levels,
            frequencies,
            transaction_count: transactions.len(),
            stats,
        })
    }
}
