use std::collections::HashSet;
use std::hash::Hash;

use crate::itemset::{Itemset, TransactionList};

/// Builds the transaction list and the base (size-1) candidate itemsets from
/// raw records.
///
/// Record order is preserved and no item is excluded regardless of frequency;
/// duplicates within a record collapse into the transaction set.
#[derive(Debug, Clone)]
pub struct TransactionIndex<I: Ord> {
    base: HashSet<Itemset<I>>,
    transactions: TransactionList<I>,
}

impl<I: Clone + Ord + Hash> TransactionIndex<I> {
    pub fn from_records<R, T>(records: R) -> Self
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = I>,
    {
        let mut base = HashSet::new();
        let mut transactions = Vec::new();
        for record in records {
            let transaction: Itemset<I> = record.into_iter().collect();
            for item in transaction.iter() {
                base.insert(Itemset::singleton(item.clone()));
            }
            transactions.push(transaction);
        }
        TransactionIndex {
            base,
            transactions: TransactionList::new(transactions),
        }
    }

    pub fn base_itemsets(&self) -> &HashSet<Itemset<I>> {
        &self.base
    }

    pub fn transactions(&self) -> &TransactionList<I> {
        &self.transactions
    }

    pub fn into_parts(self) -> (HashSet<Itemset<I>>, TransactionList<I>) {
        (self.base, self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_itemsets_and_transaction_list() {
        let records = vec![
            vec!["beer", "rice", "apple", "chicken"],
            vec!["mango", "beer"],
        ];
        let index = TransactionIndex::from_records(
            records
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect::<Vec<_>>()),
        );

        let expected: HashSet<Itemset<String>> = ["chicken", "apple", "beer", "rice", "mango"]
            .iter()
            .map(|s| Itemset::singleton(s.to_string()))
            .collect();
        assert_eq!(index.base_itemsets(), &expected);

        assert_eq!(index.transactions().len(), 2);
        let transactions: Vec<_> = index.transactions().iter().cloned().collect();
        assert_eq!(transactions[0], set(&["beer", "rice", "apple", "chicken"]));
        assert_eq!(transactions[1], set(&["mango", "beer"]));
    }

    #[test]
    fn test_empty_records_produce_empty_index() {
        let index = TransactionIndex::from_records(Vec::<Vec<String>>::new());
        assert!(index.base_itemsets().is_empty());
        assert!(index.transactions().is_empty());
    }
}
