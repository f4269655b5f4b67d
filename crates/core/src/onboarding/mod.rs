//! Onboarding form validation.
//!
//! A schema is built for one [`AuthMode`]. Sign-in only checks the credentials;
//! sign-up additionally requires and constrains the personal details. Each mode
//! has its own precomputed rule table, so building a schema is a lookup.
//!
//! ```
//! use finboard_core::onboarding::{AuthMode, Field, OnboardingInput, build_schema};
//!
//! let mut input = OnboardingInput::default();
//! input.set(Field::Email, "jane@example.com");
//! input.set(Field::Password, "Secr3t!pass");
//!
//! let record = build_schema(AuthMode::SignIn).validate(&input).unwrap();
//! assert_eq!(record.email, "jane@example.com");
//! ```

pub mod error;
pub mod field;
pub mod mode;
pub mod record;
mod rules;
pub mod schema;

#[cfg(test)]
mod schema_props;

pub use error::{FieldError, FieldErrorKind, FieldErrors};
pub use field::Field;
pub use mode::{AuthMode, ParseAuthModeError};
pub use record::{OnboardingInput, OnboardingRecord};
pub use schema::{OnboardingSchema, build_schema};
