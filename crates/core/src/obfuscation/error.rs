//! Obfuscation error types.

use finboard_shared::AppError;
use thiserror::Error;

/// Errors that can occur while decoding an obfuscated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObfuscationError {
    /// The token was not produced by `encode_id`.
    #[error("Malformed identifier token: {0}")]
    MalformedInput(String),
}

impl ObfuscationError {
    /// Returns the error code for structured output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "MALFORMED_INPUT",
        }
    }
}

impl From<ObfuscationError> for AppError {
    fn from(err: ObfuscationError) -> Self {
        match err {
            ObfuscationError::MalformedInput(reason) => Self::MalformedInput(reason),
        }
    }
}
