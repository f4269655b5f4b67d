//! Account domain types.

use finboard_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account type as reported by the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Checking or savings.
    Depository,
    /// Credit card or line of credit.
    Credit,
    /// Loan.
    Loan,
    /// Investment or brokerage.
    Investment,
    /// Anything else.
    #[serde(other)]
    Other,
}

/// A linked bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Name on the bank's records.
    #[serde(default)]
    pub official_name: Option<String>,
    /// Last digits of the account number.
    #[serde(default)]
    pub mask: Option<String>,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Account subtype (`checking`, `savings`, ...).
    #[serde(default)]
    pub subtype: Option<String>,
    /// Current balance.
    pub current_balance: Decimal,
    /// Available balance.
    pub available_balance: Decimal,
}

/// Totals shown in the balance box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsSummary {
    /// Number of linked accounts.
    pub total_banks: usize,
    /// Sum of current balances.
    pub total_current_balance: Decimal,
}
