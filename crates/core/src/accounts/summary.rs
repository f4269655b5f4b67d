//! Balance totals across accounts.

use rust_decimal::Decimal;

use super::types::{Account, AccountsSummary};

/// Counts accounts and sums their current balances.
#[must_use]
pub fn summarize_accounts(accounts: &[Account]) -> AccountsSummary {
    AccountsSummary {
        total_banks: accounts.len(),
        total_current_balance: accounts.iter().map(|a| a.current_balance).sum::<Decimal>(),
    }
}
