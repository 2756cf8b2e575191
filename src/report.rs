use std::cmp::Ordering;
use std::fmt::{Display, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MiningError;
use crate::rules::Rule;

/// Which interestingness measure orders the rule listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleOrder {
    Confidence,
    Lift,
    Conviction,
}

impl Default for RuleOrder {
    fn default() -> Self {
        RuleOrder::Confidence
    }
}

impl FromStr for RuleOrder {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confidence" => Ok(RuleOrder::Confidence),
            "lift" => Ok(RuleOrder::Lift),
            "conviction" => Ok(RuleOrder::Conviction),
            other => Err(MiningError::Input(format!(
                "unknown order '{}', expected confidence, lift or conviction",
                other
            ))),
        }
    }
}

fn order_key<I: Ord>(rule: &Rule<I>, order: RuleOrder) -> f64 {
    match order {
        RuleOrder::Confidence => rule.confidence,
        RuleOrder::Lift => rule.lift,
        RuleOrder::Conviction => rule.conviction,
    }
}

fn format_tuple<I: Display>(items: &[I]) -> String {
    let labels: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("({})", labels.join(", "))
}

/// Renders itemsets ascending by support, then rules ascending by the chosen
/// measure. Presentation only; the mined sequences themselves are unordered.
pub fn format_results<I: Clone + Display + Ord>(
    items: &[(Vec<I>, f64)],
    rules: &[Rule<I>],
    order: RuleOrder,
) -> String {
    let mut out = String::new();

    let mut items: Vec<_> = items.to_vec();
    items.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    for (itemset, support) in &items {
        let _ = writeln!(out, "item: {} \t {:.3}", format_tuple(itemset), support);
    }

    let mut rules: Vec<_> = rules.to_vec();
    rules.sort_by(|a, b| {
        order_key(a, order)
            .partial_cmp(&order_key(b, order))
            .unwrap_or(Ordering::Equal)
    });
    out.push_str("\n ------------------------ RULES:\n");
    out.push_str("\n ------- PRE \t POST \t CONFIDENCE \t LIFT \t CONVICTION -------\n\n");
    for rule in &rules {
        let _ = writeln!(
            out,
            "Rule: {} ==> \t {} \t {:.3} \t {:.3} \t {:.3}",
            format_tuple(&rule.antecedent_items()),
            format_tuple(&rule.consequent_items()),
            rule.confidence,
            rule.lift,
            rule.conviction
        );
    }
    out
}
