//! Property-based tests for onboarding validation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::{AuthMode, Field, FieldErrorKind, OnboardingInput, build_schema};

fn sign_up_input(date_of_birth: String, password: String) -> OnboardingInput {
    let mut input = OnboardingInput::default();
    input.set(Field::FirstName, "Ada");
    input.set(Field::LastName, "Lovelace");
    input.set(Field::Address1, "12 Analytical Row");
    input.set(Field::City, "London");
    input.set(Field::State, "ln");
    input.set(Field::PostalCode, "56001");
    input.set(Field::DateOfBirth, date_of_birth);
    input.set(Field::Email, "ada@example.com");
    input.set(Field::Password, password);
    input
}

/// Strategy to generate a day that exists, between 1000 and 9999.
fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=366).prop_filter_map("day past year end", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

/// Strategy to generate a password satisfying every rule.
fn strong_password() -> impl Strategy<Value = String> {
    ("[A-Z]{1,4}", "[a-z]{1,20}", "[0-9]{1,4}", "[@$!%*?&]{1,4}")
        .prop_map(|(upper, lower, digits, special)| format!("{lower}{upper}{special}{digits}"))
        .prop_filter("at least 8 characters", |p| p.len() >= 8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every real day in DD-MM-YYYY form is accepted unchanged.
    #[test]
    fn prop_calendar_dates_accepted(date in calendar_date()) {
        let formatted = format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year());
        let record = build_schema(AuthMode::SignUp)
            .validate(&sign_up_input(formatted.clone(), "Secr3t!pass".to_string()))
            .unwrap();
        prop_assert_eq!(record.date_of_birth, Some(formatted));
    }

    /// Day and month combinations that do not exist are rejected as dates.
    #[test]
    fn prop_impossible_dates_rejected(
        day in 1u32..=99,
        month in 0u32..=99,
        year in 1000i32..=9999,
    ) {
        prop_assume!(NaiveDate::from_ymd_opt(year, month, day).is_none());

        let formatted = format!("{day:02}-{month:02}-{year:04}");
        let errors = build_schema(AuthMode::SignUp)
            .validate(&sign_up_input(formatted, "Secr3t!pass".to_string()))
            .unwrap_err();

        prop_assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::DateOfBirth]);
        prop_assert_eq!(errors.get(Field::DateOfBirth)[0].kind, FieldErrorKind::InvalidDate);
    }

    /// Any password built from all four character classes passes in both modes.
    #[test]
    fn prop_strong_passwords_accepted(
        password in strong_password(),
        mode in prop_oneof![Just(AuthMode::SignIn), Just(AuthMode::SignUp)],
    ) {
        let record = build_schema(mode)
            .validate(&sign_up_input("01-01-2000".to_string(), password.clone()))
            .unwrap();
        prop_assert_eq!(record.password, password);
    }

    /// Validation never depends on surrounding whitespace of required fields.
    #[test]
    fn prop_required_values_trimmed(
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let mut input = sign_up_input("01-01-2000".to_string(), "Secr3t!pass".to_string());
        input.set(Field::City, format!("{left}London{right}"));
        input.set(Field::Email, format!("{left}ada@example.com{right}"));

        let record = build_schema(AuthMode::SignUp).validate(&input).unwrap();
        prop_assert_eq!(record.city.as_deref(), Some("London"));
        prop_assert_eq!(record.email, "ada@example.com");
    }
}
