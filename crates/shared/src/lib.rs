//! Shared types, errors, and configuration for Finboard.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for accounts and transactions
//! - Display currency codes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AdminSettings, AppConfig, BackendConfig, DigestConfig, SessionSettings};
pub use error::{AppError, AppResult};
