//! Transaction aggregation and status.
//!
//! This module provides:
//! - The transaction record as supplied by callers
//! - Category breakdowns ranked by transaction count
//! - Settlement status derived from the transaction date

pub mod categories;
pub mod status;
pub mod types;

#[cfg(test)]
mod categories_props;

pub use categories::{count_transaction_categories, count_transaction_categories_par};
pub use status::{PROCESSING_WINDOW_DAYS, transaction_status};
pub use types::{CategoryCount, Transaction, TransactionStatus};
