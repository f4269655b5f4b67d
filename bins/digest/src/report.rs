//! Plain-text rendering of an account export.

use std::fmt;

use chrono::{DateTime, Utc};
use finboard_core::accounts::{Account, summarize_accounts};
use finboard_core::format::{format_amount, format_date_time};
use finboard_core::obfuscation::shareable_id;
use finboard_core::query::form_url_query;
use finboard_core::text::remove_special_characters;
use finboard_core::transactions::{
    Transaction, count_transaction_categories_par, transaction_status,
};
use serde::Deserialize;

/// Page the account links point at.
const HISTORY_PATH: &str = "/transaction-history";

/// Accounts and transactions as exported by the account layer.
#[derive(Debug, Default, Deserialize)]
pub struct Export {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A digest of one export, rendered through `Display`.
pub struct Digest<'a> {
    export: &'a Export,
    recent: usize,
    now: DateTime<Utc>,
}

impl<'a> Digest<'a> {
    /// Creates a digest listing the `recent` latest transactions as of `now`.
    pub fn new(export: &'a Export, recent: usize, now: DateTime<Utc>) -> Self {
        Self {
            export,
            recent,
            now,
        }
    }

    fn write_accounts(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = summarize_accounts(&self.export.accounts);
        writeln!(
            f,
            "Bank accounts: {}  Total current balance: {}",
            summary.total_banks,
            format_amount(summary.total_current_balance)
        )?;
        for account in &self.export.accounts {
            let link = form_url_query("", "id", &shareable_id(&account.id), HISTORY_PATH);
            writeln!(
                f,
                "  {} ({}) {}  {}",
                account.name,
                account.mask.as_deref().unwrap_or("----"),
                format_amount(account.current_balance),
                link
            )?;
        }
        Ok(())
    }

    fn write_categories(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top categories:")?;
        let categories = count_transaction_categories_par(&self.export.transactions);
        if categories.is_empty() {
            return writeln!(f, "  (no transactions)");
        }
        for category in &categories {
            let name = if category.name.is_empty() {
                "Uncategorized"
            } else {
                category.name.as_str()
            };
            writeln!(
                f,
                "  {name}: {} of {} ({:.2}%)",
                category.count,
                category.total_count,
                category.percentage()
            )?;
        }
        Ok(())
    }

    fn write_recent(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recent transactions:")?;
        let mut transactions: Vec<&Transaction> = self.export.transactions.iter().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        for transaction in transactions.into_iter().take(self.recent) {
            let formatted = format_date_time(&transaction.date);
            writeln!(
                f,
                "  {}  {}  {}  {}",
                formatted.date_time,
                remove_special_characters(&transaction.name),
                format_amount(transaction.amount),
                transaction_status(transaction.date, self.now)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_accounts(f)?;
        writeln!(f)?;
        self.write_categories(f)?;
        writeln!(f)?;
        self.write_recent(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use finboard_core::accounts::AccountType;
    use finboard_shared::types::{AccountId, TransactionId};
    use rust_decimal_macros::dec;

    fn transaction(id: &str, name: &str, category: &str, day: u32) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            name: name.to_string(),
            account_id: AccountId::new("acc_123"),
            amount: dec!(-1250.5),
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2023, 10, day, 20, 30, 0).unwrap(),
            payment_channel: None,
            pending: false,
        }
    }

    fn export() -> Export {
        Export {
            accounts: vec![Account {
                id: AccountId::new("acc_123"),
                name: "Everyday Checking".to_string(),
                official_name: None,
                mask: Some("0000".to_string()),
                account_type: AccountType::Depository,
                subtype: Some("checking".to_string()),
                current_balance: dec!(123456.7),
                available_balance: dec!(120000),
            }],
            transactions: vec![
                transaction("t1", "Uber 063015 SF**POOL**", "Travel", 20),
                transaction("t2", "Starbucks", "Food and Drink", 25),
                transaction("t3", "United Airlines", "Travel", 24),
            ],
        }
    }

    #[test]
    fn test_renders_every_section() {
        let export = export();
        let now = Utc.with_ymd_and_hms(2023, 10, 27, 0, 0, 0).unwrap();
        let text = Digest::new(&export, 2, now).to_string();

        assert!(text.contains("Bank accounts: 1  Total current balance: ₹1,23,456.70"));
        assert!(text.contains("/transaction-history?id=YWNjXzEyMw%3D%3D"));
        assert!(text.contains("  Travel: 2 of 3 (66.67%)"));
        assert!(text.contains("  Food and Drink: 1 of 3 (33.33%)"));
        assert!(text.contains("  Wed, Oct 25, 8:30 PM  Starbucks  -₹1,250.50  Processing"));
        assert!(text.contains("  Tue, Oct 24, 8:30 PM  United Airlines  -₹1,250.50  Success"));
        assert!(!text.contains("Uber"));
    }

    #[test]
    fn test_empty_export() {
        let export = Export::default();
        let text = Digest::new(&export, 5, Utc::now()).to_string();
        assert!(text.contains("Bank accounts: 0  Total current balance: ₹0.00"));
        assert!(text.contains("(no transactions)"));
    }

    #[test]
    fn test_deserializes_export() {
        let json = r#"{
            "accounts": [],
            "transactions": [{
                "id": "t1",
                "name": "Uber",
                "accountId": "acc_1",
                "amount": "12.5",
                "category": "Travel",
                "date": "2023-10-25T20:30:00Z"
            }]
        }"#;
        let export: Export = serde_json::from_str(json).unwrap();
        assert_eq!(export.transactions.len(), 1);
        assert!(!export.transactions[0].pending);
    }
}
