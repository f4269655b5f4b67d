//! Category breakdown of a transaction list.
//!
//! Results are ranked by count, highest first. Categories with the same count
//! keep the order in which they first appear in the input, so the output is
//! deterministic for a given input order.

use std::collections::HashMap;

use rayon::prelude::*;

use super::types::{CategoryCount, Transaction};

/// Inputs smaller than this are counted sequentially by the parallel variant.
const PARALLEL_THRESHOLD: usize = 4096;

/// Per-category tally: where the category first appeared and how often.
#[derive(Debug, Default)]
struct Tally<'a> {
    slots: HashMap<&'a str, (usize, usize)>,
}

impl<'a> Tally<'a> {
    fn record(&mut self, position: usize, category: &'a str) {
        self.slots
            .entry(category)
            .and_modify(|(_, count)| *count += 1)
            .or_insert((position, 1));
    }

    fn merge(mut self, other: Self) -> Self {
        for (category, (first_seen, count)) in other.slots {
            self.slots
                .entry(category)
                .and_modify(|(seen, total)| {
                    *seen = (*seen).min(first_seen);
                    *total += count;
                })
                .or_insert((first_seen, count));
        }
        self
    }

    fn into_ranked(self, total_count: usize) -> Vec<CategoryCount> {
        let mut slots: Vec<(&str, usize, usize)> = self
            .slots
            .into_iter()
            .map(|(name, (first_seen, count))| (name, first_seen, count))
            .collect();
        slots.sort_by_key(|&(_, first_seen, _)| first_seen);
        // Stable: ties keep first-seen order.
        slots.sort_by(|a, b| b.2.cmp(&a.2));

        slots
            .into_iter()
            .map(|(name, _, count)| CategoryCount {
                name: name.to_string(),
                count,
                total_count,
            })
            .collect()
    }
}

/// Counts transactions per category, ranked by count descending.
///
/// Every element carries the same `total_count` (the number of transactions)
/// so callers can compute shares without a second pass. An empty slice yields
/// an empty result; empty category strings are counted like any other label.
#[must_use]
pub fn count_transaction_categories(transactions: &[Transaction]) -> Vec<CategoryCount> {
    let mut tally = Tally::default();
    for (position, transaction) in transactions.iter().enumerate() {
        tally.record(position, &transaction.category);
    }
    tally.into_ranked(transactions.len())
}

/// Parallel variant of [`count_transaction_categories`] for large exports.
///
/// Partial tallies are merged by summing counts and keeping the earliest
/// position, so the output is identical to the sequential function.
#[must_use]
pub fn count_transaction_categories_par(transactions: &[Transaction]) -> Vec<CategoryCount> {
    if transactions.len() < PARALLEL_THRESHOLD {
        return count_transaction_categories(transactions);
    }

    let tally = transactions
        .par_iter()
        .enumerate()
        .fold(Tally::default, |mut tally, (position, transaction)| {
            tally.record(position, &transaction.category);
            tally
        })
        .reduce(Tally::default, Tally::merge);

    tally.into_ranked(transactions.len())
}
