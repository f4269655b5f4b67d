//! Raw and normalized onboarding submissions.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// A form submission as typed by the user. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingInput {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Street address line.
    pub address1: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State code.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
}

impl OnboardingInput {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Address1 => &mut self.address1,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::PostalCode => &mut self.postal_code,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// Returns the submitted value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address1 => &self.address1,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Email => &self.email,
            Field::Password => &self.password,
        };
        value.as_deref()
    }

    /// Sets the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = Some(value.into());
    }

    /// Removes the value of `field`.
    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }
}

/// A validated submission.
///
/// Validated strings are trimmed and the state code is uppercase. Sign-up-only
/// fields are `None` when the sign-in form left them out; under sign-in any
/// value that was sent is kept as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Street address line.
    pub address1: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Uppercase state code.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Date of birth, `DD-MM-YYYY`.
    pub date_of_birth: Option<String>,
    /// Email address.
    pub email: String,
    /// Password.
    #[serde(skip_serializing)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut input = OnboardingInput::default();
        for field in Field::ALL {
            assert_eq!(input.get(field), None);
            input.set(field, field.as_str());
            assert_eq!(input.get(field), Some(field.as_str()));
        }
        input.clear(Field::City);
        assert_eq!(input.get(Field::City), None);
        assert_eq!(input.get(Field::State), Some("state"));
    }

    #[test]
    fn test_deserializes_form_keys() {
        let json = r#"{
            "firstName": "Ada",
            "address1": "12 Analytical Row",
            "postalCode": "56001",
            "dateOfBirth": "10-12-1990",
            "email": "ada@example.com",
            "unknownField": true
        }"#;
        let input: OnboardingInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.get(Field::FirstName), Some("Ada"));
        assert_eq!(input.get(Field::Address1), Some("12 Analytical Row"));
        assert_eq!(input.get(Field::PostalCode), Some("56001"));
        assert_eq!(input.get(Field::DateOfBirth), Some("10-12-1990"));
        assert_eq!(input.get(Field::Password), None);
    }

    #[test]
    fn test_record_never_serializes_password() {
        let record = OnboardingRecord {
            email: "ada@example.com".to_string(),
            password: "Secr3t!pass".to_string(),
            ..OnboardingRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }
}
