//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend service connection settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Digest output settings.
    #[serde(default)]
    pub digest: DigestConfig,
}

/// Backend-as-a-service connection settings.
///
/// Every value is optional at load time so that tools which never talk to the
/// backend can still start. Callers that need a client ask for
/// [`BackendConfig::session_settings`] or [`BackendConfig::admin_settings`],
/// which check for the values they require.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Service endpoint URL.
    pub endpoint: Option<String>,
    /// Project identifier.
    pub project_id: Option<String>,
    /// Server-side API key (admin access only).
    pub api_key: Option<String>,
    /// Name of the cookie carrying the user session.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            project_id: None,
            api_key: None,
            session_cookie: default_session_cookie(),
        }
    }
}

fn default_session_cookie() -> String {
    "finboard-session".to_string()
}

/// Settings for a client acting on behalf of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Service endpoint URL.
    pub endpoint: String,
    /// Project identifier.
    pub project_id: String,
    /// Name of the session cookie.
    pub session_cookie: String,
}

/// Settings for a privileged server-side client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSettings {
    /// Service endpoint URL.
    pub endpoint: String,
    /// Project identifier.
    pub project_id: String,
    /// Server-side API key.
    pub api_key: String,
}

impl BackendConfig {
    /// Returns the settings needed for a session client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` naming every missing value.
    pub fn session_settings(&self) -> AppResult<SessionSettings> {
        let missing = missing_keys(&[
            ("endpoint", self.endpoint.as_deref()),
            ("project_id", self.project_id.as_deref()),
        ]);
        if !missing.is_empty() {
            return Err(missing_error("session", &missing));
        }

        Ok(SessionSettings {
            endpoint: self.endpoint.clone().unwrap_or_default(),
            project_id: self.project_id.clone().unwrap_or_default(),
            session_cookie: self.session_cookie.clone(),
        })
    }

    /// Returns the settings needed for an admin client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` naming every missing value.
    pub fn admin_settings(&self) -> AppResult<AdminSettings> {
        let missing = missing_keys(&[
            ("endpoint", self.endpoint.as_deref()),
            ("project_id", self.project_id.as_deref()),
            ("api_key", self.api_key.as_deref()),
        ]);
        if !missing.is_empty() {
            return Err(missing_error("admin", &missing));
        }

        Ok(AdminSettings {
            endpoint: self.endpoint.clone().unwrap_or_default(),
            project_id: self.project_id.clone().unwrap_or_default(),
            api_key: self.api_key.clone().unwrap_or_default(),
        })
    }
}

/// Blank strings count as missing.
fn missing_keys(values: &[(&'static str, Option<&str>)]) -> Vec<&'static str> {
    values
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(key, _)| *key)
        .collect()
}

fn missing_error(client: &str, missing: &[&str]) -> AppError {
    let keys = missing
        .iter()
        .map(|key| format!("backend.{key}"))
        .collect::<Vec<_>>()
        .join(", ");
    AppError::Configuration(format!("missing {client} client settings: {keys}"))
}

/// Digest output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DigestConfig {
    /// Number of recent transactions to list.
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            recent_transactions: default_recent_transactions(),
        }
    }
}

fn default_recent_transactions() -> usize {
    5
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `FINBOARD__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINBOARD").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            backend_endpoint = loaded.backend.endpoint.is_some(),
            recent_transactions = loaded.digest.recent_transactions,
            "configuration loaded"
        );
        Ok(loaded)
    }
}
