//! Onboarding form fields.

use serde::{Deserialize, Serialize};

/// A field of the onboarding form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Street address line.
    Address1,
    /// City.
    City,
    /// Two-letter state code.
    State,
    /// Postal code.
    PostalCode,
    /// Date of birth, `DD-MM-YYYY`.
    DateOfBirth,
    /// Email address.
    Email,
    /// Password.
    Password,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 9] = [
        Self::FirstName,
        Self::LastName,
        Self::Address1,
        Self::City,
        Self::State,
        Self::PostalCode,
        Self::DateOfBirth,
        Self::Email,
        Self::Password,
    ];

    /// Returns the form key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address1 => "address1",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postalCode",
            Self::DateOfBirth => "dateOfBirth",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
