//! Finboard account digest
//!
//! Reads a JSON export of linked accounts and their transactions and prints
//! balances, a category breakdown and the latest transactions.
//!
//! Usage: digest <export.json>

mod report;

use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finboard_shared::AppConfig;

use crate::report::{Digest, Export};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    match config.backend.session_settings() {
        Ok(settings) => debug!(endpoint = %settings.endpoint, "backend configured"),
        Err(e) => warn!(error = %e, "backend not configured, reading local export only"),
    }

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: digest <export.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let export: Export = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(
        accounts = export.accounts.len(),
        transactions = export.transactions.len(),
        "export loaded"
    );

    let digest = Digest::new(&export, config.digest.recent_transactions, chrono::Utc::now());
    print!("{digest}");

    Ok(())
}
