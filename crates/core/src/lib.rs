//! Core data logic for Finboard.
//!
//! This crate contains pure data logic with ZERO ui, network or storage dependencies.
//! Display formatting, aggregation and form validation all live here.
//!
//! # Modules
//!
//! - `accounts` - Linked bank accounts and balance totals
//! - `format` - Rupee amounts and en-US timestamp strings
//! - `obfuscation` - Reversible identifier encoding for URLs
//! - `onboarding` - Mode-dependent sign-in / sign-up validation
//! - `query` - Query-string rewriting and URL segment helpers
//! - `text` - Free-text cleanup
//! - `transactions` - Category breakdowns and settlement status

pub mod accounts;
pub mod format;
pub mod obfuscation;
pub mod onboarding;
pub mod query;
pub mod text;
pub mod transactions;
