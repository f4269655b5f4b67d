//! Mode-bound onboarding validator.

use std::collections::BTreeMap;

use super::error::{FieldError, FieldErrorKind, FieldErrors};
use super::field::Field;
use super::mode::AuthMode;
use super::record::{OnboardingInput, OnboardingRecord};
use super::rules::{self, FieldSpec, Presence};

/// Validator for one onboarding mode.
///
/// Holds no state between calls; the rule table it points to is immutable.
#[derive(Debug, Clone, Copy)]
pub struct OnboardingSchema {
    mode: AuthMode,
    fields: &'static [FieldSpec],
}

/// Returns the validator for `mode`.
#[must_use]
pub fn build_schema(mode: AuthMode) -> OnboardingSchema {
    OnboardingSchema::new(mode)
}

impl OnboardingSchema {
    /// Returns the validator for `mode`.
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        let fields = match mode {
            AuthMode::SignIn => rules::sign_in(),
            AuthMode::SignUp => rules::sign_up(),
        };
        Self { mode, fields }
    }

    /// The mode this validator was built for.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Fields that must be submitted in this mode, in form order.
    pub fn required_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields
            .iter()
            .filter(|spec| matches!(spec.presence, Presence::Required(_)))
            .map(|spec| spec.field)
    }

    /// Validates a submission.
    ///
    /// Every field is checked; all failures are returned together. A missing
    /// required field reports only its `Required` error.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrors` listing every failed rule.
    pub fn validate(&self, input: &OnboardingInput) -> Result<OnboardingRecord, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut values = BTreeMap::new();

        for spec in self.fields {
            match check_field(spec, input.get(spec.field)) {
                Ok(Some(value)) => {
                    values.insert(spec.field, value);
                }
                Ok(None) => {}
                Err(failures) => failures.into_iter().for_each(|e| errors.push(e)),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(OnboardingRecord {
            first_name: values.remove(&Field::FirstName),
            last_name: values.remove(&Field::LastName),
            address1: values.remove(&Field::Address1),
            city: values.remove(&Field::City),
            state: values.remove(&Field::State),
            postal_code: values.remove(&Field::PostalCode),
            date_of_birth: values.remove(&Field::DateOfBirth),
            // Required in every mode, so present once validation passed.
            email: values.remove(&Field::Email).unwrap_or_default(),
            password: values.remove(&Field::Password).unwrap_or_default(),
        })
    }
}

/// Runs one field's rules, returning its normalized value or its failures.
fn check_field(spec: &FieldSpec, raw: Option<&str>) -> Result<Option<String>, Vec<FieldError>> {
    let value = match (&spec.presence, raw) {
        (Presence::Optional, value) => return Ok(value.map(str::to_string)),
        (Presence::Required(message), None) => {
            return Err(vec![FieldError::new(
                spec.field,
                FieldErrorKind::Required,
                *message,
            )]);
        }
        (Presence::Required(_), Some(value)) => value.trim(),
    };

    let mut failures = Vec::new();
    for rule in &spec.rules {
        if rule.is_gated() && !failures.is_empty() {
            continue;
        }
        if let Some((kind, message)) = rule.check(value) {
            failures.push(FieldError::new(spec.field, kind, message));
        }
    }

    if failures.is_empty() {
        Ok(Some(spec.transform.apply(value)))
    } else {
        Err(failures)
    }
}
