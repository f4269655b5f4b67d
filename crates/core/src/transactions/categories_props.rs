//! Property-based tests for category aggregation.

use chrono::{TimeZone, Utc};
use finboard_shared::types::{AccountId, TransactionId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::categories::{count_transaction_categories, count_transaction_categories_par};
use super::types::Transaction;

/// Strategy to generate a category label from a small pool, including empty.
fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Travel".to_string()),
        Just("Food and Drink".to_string()),
        Just("Payment".to_string()),
        "[A-Z][a-z]{0,6}",
    ]
}

fn make_transaction(position: usize, category: String) -> Transaction {
    Transaction {
        id: TransactionId::new(format!("txn-{position}")),
        name: "Merchant".to_string(),
        account_id: AccountId::new("acc_1"),
        amount: Decimal::ONE,
        category,
        date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        payment_channel: None,
        pending: false,
    }
}

fn transactions_strategy(max: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(category_strategy(), 0..max).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, c)| make_transaction(i, c))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Counts add up to the number of transactions and every element
    /// carries that same total.
    #[test]
    fn prop_counts_sum_to_total(transactions in transactions_strategy(200)) {
        let counts = count_transaction_categories(&transactions);

        let sum: usize = counts.iter().map(|c| c.count).sum();
        prop_assert_eq!(sum, transactions.len());
        prop_assert!(counts.iter().all(|c| c.total_count == transactions.len()));
    }

    /// Output is ranked by count, and ties follow first appearance.
    #[test]
    fn prop_ranked_with_first_seen_ties(transactions in transactions_strategy(200)) {
        let counts = count_transaction_categories(&transactions);
        let first_seen = |name: &str| {
            transactions.iter().position(|t| t.category == name).unwrap()
        };

        for pair in counts.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                prop_assert!(first_seen(&pair[0].name) < first_seen(&pair[1].name));
            }
        }
    }

    /// Every category appears exactly once with a positive count.
    #[test]
    fn prop_one_entry_per_category(transactions in transactions_strategy(200)) {
        let counts = count_transaction_categories(&transactions);
        let mut names: Vec<&str> = counts.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), counts.len());
        prop_assert!(counts.iter().all(|c| c.count > 0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// The parallel aggregator agrees with the sequential one.
    #[test]
    fn prop_parallel_matches_sequential(transactions in transactions_strategy(10_000)) {
        prop_assert_eq!(
            count_transaction_categories_par(&transactions),
            count_transaction_categories(&transactions)
        );
    }
}
