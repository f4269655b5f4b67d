//! Form mode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which onboarding form is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    /// Returning user: credentials only.
    SignIn,
    /// New user: credentials plus personal details.
    SignUp,
}

impl AuthMode {
    /// Returns the route-style name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown auth mode: {0}")]
pub struct ParseAuthModeError(pub String);

impl std::str::FromStr for AuthMode {
    type Err = ParseAuthModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sign-in" => Ok(Self::SignIn),
            "sign-up" => Ok(Self::SignUp),
            _ => Err(ParseAuthModeError(s.to_string())),
        }
    }
}
