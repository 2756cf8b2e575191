use std::hash::Hash;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::MiningError;
use crate::itemset::Itemset;
use crate::miner::MiningResult;

/// What to do when a rule has confidence exactly 1, which makes conviction's
/// denominator zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvictionPolicy {
    /// Treat conviction as +∞; the rule passes any finite conviction floor.
    Infinite,
    /// Abort the run with an arithmetic error.
    Fail,
}

impl Default for ConvictionPolicy {
    fn default() -> Self {
        ConvictionPolicy::Infinite
    }
}

/// Rule acceptance thresholds. A rule is kept only if confidence, lift and
/// conviction ALL meet their floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleThresholds {
    pub min_confidence: f64,
    pub min_lift: f64,
    pub min_conviction: f64,
    pub conviction_policy: ConvictionPolicy,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            min_confidence: 0.6,
            min_lift: 1.0,
            min_conviction: 1.0,
            conviction_policy: ConvictionPolicy::default(),
        }
    }
}

impl RuleThresholds {
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence,
            ..Default::default()
        }
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = min_lift;
        self
    }

    pub fn with_min_conviction(mut self, min_conviction: f64) -> Self {
        self.min_conviction = min_conviction;
        self
    }

    pub fn with_conviction_policy(mut self, policy: ConvictionPolicy) -> Self {
        self.conviction_policy = policy;
        self
    }
}

/// A scored association rule: antecedent → consequent, where the two sides are
/// disjoint and their union is a confirmed frequent itemset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule<I: Ord> {
    pub antecedent: Itemset<I>,
    pub consequent: Itemset<I>,
    pub confidence: f64,
    pub lift: f64,
    pub conviction: f64,
}

impl<I: Clone + Ord> Rule<I> {
    pub fn antecedent_items(&self) -> Vec<I> {
        self.antecedent.to_vec()
    }

    pub fn consequent_items(&self) -> Vec<I> {
        self.consequent.to_vec()
    }
}

/// Scores every non-trivial antecedent/consequent split of every frequent
/// itemset against the thresholds.
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    thresholds: RuleThresholds,
}

impl RuleGenerator {
    pub fn new(thresholds: RuleThresholds) -> Result<Self, MiningError> {
        if !(thresholds.min_confidence >= 0.0 && thresholds.min_confidence <= 1.0) {
            return Err(MiningError::Configuration(format!(
                "minimum confidence must be in [0, 1], got {}",
                thresholds.min_confidence
            )));
        }
        if !(thresholds.min_lift >= 0.0) {
            return Err(MiningError::Configuration(format!(
                "minimum lift must be non-negative, got {}",
                thresholds.min_lift
            )));
        }
        Ok(RuleGenerator { thresholds })
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    /// Enumerates, for every frequent itemset at every level, all of its
    /// 2^k − 2 non-empty proper subsets as antecedents; the consequent is the
    /// set difference. Only itemsets already confirmed frequent are split, so
    /// every support lookup hits a table entry.
    pub fn generate<I>(&self, mined: &MiningResult<I>) -> Result<Vec<Rule<I>>, MiningError>
    where
        I: Clone + Ord + Hash + std::fmt::Debug,
    {
        let mut rules = Vec::new();
        for itemsets in mined.levels.values() {
            for itemset in itemsets {
                let itemset_support = mined.support(itemset);
                for antecedent in itemset.proper_subsets() {
                    let consequent = itemset.difference(&antecedent);
                    let confidence = itemset_support / mined.support(&antecedent);
                    let lift = itemset_support
                        / (mined.support(&antecedent) * mined.support(&consequent));
                    let denominator = 1.0 - confidence;
                    let conviction = if denominator == 0.0 {
                        match self.thresholds.conviction_policy {
                            ConvictionPolicy::Infinite => f64::INFINITY,
                            ConvictionPolicy::Fail => {
                                return Err(MiningError::Arithmetic(format!(
                                    "conviction is undefined for {:?} => {:?}: confidence is 1",
                                    antecedent.to_vec(),
                                    consequent.to_vec()
                                )))
                            }
                        }
                    } else {
                        (1.0 - mined.support(&consequent)) / denominator
                    };

                    // Strict AND of the three filters, in this order.
                    if confidence >= self.thresholds.min_confidence
                        && lift >= self.thresholds.min_lift
                        && conviction >= self.thresholds.min_conviction
                    {
                        rules.push(Rule {
                            antecedent,
                            consequent,
                            confidence,
                            lift,
                            conviction,
                        });
                    }
                }
            }
        }
        info!("Rule generation kept {} rules", rules.len());
        Ok(rules)
    }
}
