//! Frequent-itemset and association-rule mining over market-basket data.
//!
//! Level-wise Apriori search: candidate generation by self-join, support-based
//! pruning against the full transaction list, then rule scoring by confidence,
//! lift and conviction.

use std::hash::Hash;

pub mod candidates;
pub mod config;
pub mod error;
pub mod index;
pub mod itemset;
pub mod miner;
pub mod report;
pub mod rules;
pub mod source;
pub mod support;

pub use candidates::CandidateGenerator;
pub use error::MiningError;
pub use index::TransactionIndex;
pub use itemset::{Itemset, TransactionList};
pub use miner::{FrequentItemsetMiner, LevelMap, MinerConfig, MiningResult, MiningStats};
pub use report::RuleOrder;
pub use rules::{ConvictionPolicy, Rule, RuleGenerator, RuleThresholds};
pub use source::CsvRecordSource;
pub use support::{FrequencyTable, SupportFilter};

/// Runs the whole batch: index the records, mine frequent itemsets at
/// `min_support`, then score every antecedent/consequent split against
/// `thresholds`.
///
/// Returns the frequent itemsets as (canonically ordered item tuple, support)
/// pairs and the retained rules, both in no particular order.
pub fn mine<I, R, T>(
    records: R,
    min_support: f64,
    thresholds: &RuleThresholds,
) -> Result<(Vec<(Vec<I>, f64)>, Vec<Rule<I>>), MiningError>
where
    I: Clone + Ord + Hash + Sync + std::fmt::Debug,
    R: IntoIterator<Item = T>,
    T: IntoIterator<Item = I>,
{
    let miner = FrequentItemsetMiner::new(MinerConfig {
        min_support,
        ..Default::default()
    })?;
    let generator = RuleGenerator::new(thresholds.clone())?;

    let index = TransactionIndex::from_records(records);
    let mined = miner.mine(index)?;
    let rules = generator.generate(&mined)?;
    Ok((mined.items(), rules))
}
