//! Field-scoped validation errors.

use std::collections::BTreeMap;

use finboard_shared::AppError;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::field::Field;

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is required but was not submitted.
    Required,
    /// Fewer characters than allowed.
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
    /// More characters than allowed.
    TooLong {
        /// Maximum number of characters.
        max: usize,
    },
    /// Not exactly the expected number of characters.
    WrongLength {
        /// Required number of characters.
        expected: usize,
    },
    /// Contains characters the field does not allow.
    InvalidCharacters,
    /// Does not match the expected textual format.
    InvalidFormat,
    /// Matches the date format but is not a calendar date.
    InvalidDate,
    /// No uppercase letter.
    MissingUppercase,
    /// No lowercase letter.
    MissingLowercase,
    /// No digit.
    MissingDigit,
    /// No character from the special-character set.
    MissingSpecialCharacter,
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending field.
    pub field: Field,
    /// Machine-readable reason.
    pub kind: FieldErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: Field, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Every validation failure of one submission, grouped by field.
///
/// Fields iterate in form order; errors within a field keep rule order.
/// Serializes as `{ "firstName": ["message", ...], ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, Vec<FieldError>>,
}

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.entry(error.field).or_default().push(error);
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if `field` failed.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Errors for `field`, empty if it passed.
    #[must_use]
    pub fn get(&self, field: Field) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// The message to show next to `field`.
    #[must_use]
    pub fn first(&self, field: Field) -> Option<&str> {
        self.get(field).first().map(|e| e.message.as_str())
    }

    /// Fields that failed, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// All errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values().flatten()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed for ")?;
        for (i, field) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, errors) in &self.errors {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            map.serialize_entry(field, &messages)?;
        }
        map.end()
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
