//! Rule tables for the onboarding schema.
//!
//! One table per mode, built once on first use. A table lists every field in
//! form order with its presence requirement, its checks and the transform
//! applied to a valid value.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

use super::error::FieldErrorKind;
use super::field::Field;

/// Letters, whitespace, apostrophes and hyphens.
const NAME_PATTERN: &str = r"^[A-Za-z\s'-]+$";
const STATE_PATTERN: &str = r"^[A-Za-z]*$";
const POSTAL_CODE_PATTERN: &str = r"^[0-9]{4,6}$";
const DATE_PATTERN: &str = r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$";
/// The password special-character set is `@$!%*?&`.
const SPECIAL_CHARACTER_PATTERN: &str = r"[@$!%*?&]";
/// Earliest year a date of birth may carry.
const MIN_BIRTH_YEAR: i32 = 100;

/// An email domain must be dotted and end in an alphabetic top-level label.
static EMAIL_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[A-Za-z]{2,}$").expect("hardcoded regex should be valid")
});

static SIGN_IN_TABLE: LazyLock<Vec<FieldSpec>> = LazyLock::new(sign_in_table);
static SIGN_UP_TABLE: LazyLock<Vec<FieldSpec>> = LazyLock::new(sign_up_table);

/// Returns the sign-in rule table.
pub(crate) fn sign_in() -> &'static [FieldSpec] {
    &SIGN_IN_TABLE
}

/// Returns the sign-up rule table.
pub(crate) fn sign_up() -> &'static [FieldSpec] {
    &SIGN_UP_TABLE
}

/// Whether a field must be submitted.
#[derive(Debug)]
pub(crate) enum Presence {
    /// May be absent; a submitted value is kept as-is without checks.
    Optional,
    /// Must be present; the message is reported when it is not.
    Required(&'static str),
}

/// What to do with a value that passed every check.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Transform {
    Keep,
    Uppercase,
}

impl Transform {
    pub(crate) fn apply(self, value: &str) -> String {
        match self {
            Self::Keep => value.to_string(),
            Self::Uppercase => value.to_uppercase(),
        }
    }
}

/// A single check on a trimmed value.
#[derive(Debug)]
pub(crate) enum Rule {
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    ExactChars(usize, &'static str),
    Matches {
        regex: Regex,
        kind: FieldErrorKind,
        message: &'static str,
    },
    Email(&'static str),
    /// Only checked once every earlier rule on the field passed.
    CalendarDate(&'static str),
}

impl Rule {
    fn matches(pattern: &str, kind: FieldErrorKind, message: &'static str) -> Self {
        Self::Matches {
            regex: Regex::new(pattern).expect("hardcoded regex should be valid"),
            kind,
            message,
        }
    }

    /// Returns true for rules that depend on earlier rules having passed.
    pub(crate) const fn is_gated(&self) -> bool {
        matches!(self, Self::CalendarDate(_))
    }

    /// Checks `value`, returning the failure if there is one.
    pub(crate) fn check(&self, value: &str) -> Option<(FieldErrorKind, &'static str)> {
        let chars = value.chars().count();
        match self {
            Self::MinChars(min, message) => {
                (chars < *min).then_some((FieldErrorKind::TooShort { min: *min }, *message))
            }
            Self::MaxChars(max, message) => {
                (chars > *max).then_some((FieldErrorKind::TooLong { max: *max }, *message))
            }
            Self::ExactChars(len, message) => {
                (chars != *len).then_some((FieldErrorKind::WrongLength { expected: *len }, *message))
            }
            Self::Matches {
                regex,
                kind,
                message,
            } => (!regex.is_match(value)).then_some((*kind, *message)),
            Self::Email(message) => {
                (!is_email(value)).then_some((FieldErrorKind::InvalidFormat, *message))
            }
            Self::CalendarDate(message) => {
                (!is_calendar_date(value)).then_some((FieldErrorKind::InvalidDate, *message))
            }
        }
    }
}

/// True for a syntactically valid address whose domain has a top-level label.
///
/// `ada@localhost` passes the HTML5 grammar but is rejected here.
pub(crate) fn is_email(value: &str) -> bool {
    value.validate_email()
        && value
            .rsplit_once('@')
            .is_some_and(|(_, domain)| EMAIL_DOMAIN.is_match(domain))
}

/// True if a `DD-MM-YYYY` string names a day that exists.
///
/// Rebuilding the date from its parts must give back the same day, month and
/// year, which rules out `31-04-2024` or `29-02-2023`. Years before
/// [`MIN_BIRTH_YEAR`] are rejected.
pub(crate) fn is_calendar_date(value: &str) -> bool {
    let mut parts = value.split('-');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let (Ok(day), Ok(month), Ok(year)) = (day.parse(), month.parse(), year.parse()) else {
        return false;
    };
    year >= MIN_BIRTH_YEAR && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Rules for one field in one mode.
#[derive(Debug)]
pub(crate) struct FieldSpec {
    pub(crate) field: Field,
    pub(crate) presence: Presence,
    pub(crate) rules: Vec<Rule>,
    pub(crate) transform: Transform,
}

impl FieldSpec {
    fn optional(field: Field) -> Self {
        Self {
            field,
            presence: Presence::Optional,
            rules: Vec::new(),
            transform: Transform::Keep,
        }
    }

    fn required(field: Field, message: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            field,
            presence: Presence::Required(message),
            rules,
            transform: Transform::Keep,
        }
    }

    fn uppercased(mut self) -> Self {
        self.transform = Transform::Uppercase;
        self
    }
}

fn sign_in_table() -> Vec<FieldSpec> {
    vec![
        FieldSpec::optional(Field::FirstName),
        FieldSpec::optional(Field::LastName),
        FieldSpec::optional(Field::Address1),
        FieldSpec::optional(Field::City),
        FieldSpec::optional(Field::State),
        FieldSpec::optional(Field::PostalCode),
        FieldSpec::optional(Field::DateOfBirth),
        email_spec(),
        password_spec(),
    ]
}

fn sign_up_table() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required(
            Field::FirstName,
            "First name is required",
            vec![
                Rule::MinChars(2, "First name must be at least 2 characters"),
                Rule::MaxChars(50, "First name cannot exceed 50 characters"),
                Rule::matches(
                    NAME_PATTERN,
                    FieldErrorKind::InvalidCharacters,
                    "First name may only contain letters, spaces, apostrophes, and hyphens",
                ),
            ],
        ),
        FieldSpec::required(
            Field::LastName,
            "Last name is required",
            vec![
                Rule::MinChars(2, "Last name must be at least 2 characters"),
                Rule::MaxChars(50, "Last name cannot exceed 50 characters"),
                Rule::matches(
                    NAME_PATTERN,
                    FieldErrorKind::InvalidCharacters,
                    "Last name may only contain letters, spaces, apostrophes, and hyphens",
                ),
            ],
        ),
        FieldSpec::required(
            Field::Address1,
            "Address is required",
            vec![
                Rule::MinChars(5, "Address must be at least 5 characters"),
                Rule::MaxChars(100, "Address cannot exceed 100 characters"),
            ],
        ),
        FieldSpec::required(
            Field::City,
            "City is required",
            vec![
                Rule::MinChars(2, "City name must be at least 2 characters"),
                Rule::MaxChars(50, "City name cannot exceed 50 characters"),
                Rule::matches(
                    NAME_PATTERN,
                    FieldErrorKind::InvalidCharacters,
                    "City name may only contain letters, spaces, apostrophes, and hyphens",
                ),
            ],
        ),
        FieldSpec::required(
            Field::State,
            "State code is required",
            vec![
                Rule::ExactChars(2, "State code must be exactly 2 letters (e.g., CA, NY)"),
                Rule::matches(
                    STATE_PATTERN,
                    FieldErrorKind::InvalidCharacters,
                    "State code must only contain letters",
                ),
            ],
        )
        .uppercased(),
        FieldSpec::required(
            Field::PostalCode,
            "Postal code is required",
            vec![Rule::matches(
                POSTAL_CODE_PATTERN,
                FieldErrorKind::InvalidFormat,
                "Postal code must be between 4 and 6 digits",
            )],
        ),
        FieldSpec::required(
            Field::DateOfBirth,
            "Date of birth is required",
            vec![
                Rule::matches(
                    DATE_PATTERN,
                    FieldErrorKind::InvalidFormat,
                    "Date must be in DD-MM-YYYY format",
                ),
                Rule::CalendarDate("Please enter a valid date."),
            ],
        ),
        email_spec(),
        password_spec(),
    ]
}

fn email_spec() -> FieldSpec {
    FieldSpec::required(
        Field::Email,
        "Email is required",
        vec![
            Rule::Email("Invalid email format"),
            Rule::MaxChars(100, "Email cannot exceed 100 characters"),
        ],
    )
}

fn password_spec() -> FieldSpec {
    FieldSpec::required(
        Field::Password,
        "Password is required",
        vec![
            Rule::MinChars(8, "Password must be at least 8 characters long"),
            Rule::MaxChars(64, "Password cannot exceed 64 characters"),
            Rule::matches(
                "[A-Z]",
                FieldErrorKind::MissingUppercase,
                "Password must contain at least one uppercase letter (A-Z)",
            ),
            Rule::matches(
                "[a-z]",
                FieldErrorKind::MissingLowercase,
                "Password must contain at least one lowercase letter (a-z)",
            ),
            Rule::matches(
                "[0-9]",
                FieldErrorKind::MissingDigit,
                "Password must contain at least one number (0-9)",
            ),
            Rule::matches(
                SPECIAL_CHARACTER_PATTERN,
                FieldErrorKind::MissingSpecialCharacter,
                "Password must include at least one special character (@, $, !, %, *, ?, &)",
            ),
        ],
    )
}
