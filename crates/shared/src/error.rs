//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// User-submitted data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input could not be decoded.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Required configuration is missing or unreadable.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Returns the error code for display and structured output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Returns true if the error was caused by caller-supplied data.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::MalformedInput(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
