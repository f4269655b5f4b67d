//! Transaction domain types.

use chrono::{DateTime, Utc};
use finboard_shared::types::{AccountId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank transaction as supplied by the account layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Merchant or counterparty name.
    pub name: String,
    /// Account the transaction belongs to.
    pub account_id: AccountId,
    /// Signed amount in the account currency.
    pub amount: Decimal,
    /// Free-text category label.
    #[serde(default)]
    pub category: String,
    /// When the transaction happened.
    pub date: DateTime<Utc>,
    /// Payment channel (`online`, `in store`, ...).
    #[serde(default)]
    pub payment_channel: Option<String>,
    /// Whether the bank still reports the transaction as pending.
    #[serde(default)]
    pub pending: bool,
}

/// Number of transactions in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category name.
    pub name: String,
    /// Transactions in this category.
    pub count: usize,
    /// Transactions across all categories.
    pub total_count: usize,
}

impl CategoryCount {
    /// Share of all transactions in this category, in percent (2 decimal places).
    ///
    /// Returns zero when `total_count` is zero.
    #[must_use]
    pub fn percentage(&self) -> Decimal {
        if self.total_count == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.count) * Decimal::ONE_HUNDRED / Decimal::from(self.total_count))
            .round_dp(2)
    }
}

/// Settlement status shown next to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Recent enough that it may still change.
    Processing,
    /// Settled.
    Success,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Success => write!(f, "Success"),
        }
    }
}
