//! Bank accounts and balance totals.

pub mod summary;
pub mod types;

pub use summary::summarize_accounts;
pub use types::{Account, AccountType, AccountsSummary};
