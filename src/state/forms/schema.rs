//! Validation rules for the registration form

use super::field::FieldName;
use super::values::FormValues;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

// Exactly ten decimal digits
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile regex"));

// local-part "@" domain, with at least one dot in the domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email regex")
});

/// A single field's validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field is empty or absent
    #[error("{0}")]
    Required(&'static str),
    /// Field is present but has the wrong shape
    #[error("{0}")]
    Format(&'static str),
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required(m) | FieldError::Format(m) => m,
        }
    }

    #[cfg(test)]
    pub fn is_required(&self) -> bool {
        matches!(self, FieldError::Required(_))
    }
}

/// Validation results keyed by field; a missing field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, FieldError>);

impl ErrorMap {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Message for a field, `None` when the field is valid
    pub fn message(&self, field: FieldName) -> Option<&'static str> {
        self.get(field)
            .map(FieldError::message)
            .filter(|m| !m.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of fields with a non-empty message
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Failing fields in display order; empty messages are skipped
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0
            .iter()
            .filter(|(_, e)| !e.message().is_empty())
            .map(|(f, e)| (*f, e))
    }
}

impl FromIterator<(FieldName, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Pure mapping from form values to validation errors
pub trait ValidationSchema {
    fn validate(&self, values: &FormValues) -> ErrorMap;
}

/// Rules for the student registration form
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationSchema;

impl RegistrationSchema {
    /// Validate one field in isolation
    pub fn validate_field(&self, values: &FormValues, field: FieldName) -> Option<FieldError> {
        match field {
            FieldName::Name => values
                .name
                .trim()
                .is_empty()
                .then_some(FieldError::Required("Name is required")),
            FieldName::Mobile => required_text(&values.mobile, "Mobile is required").or_else(|| {
                (!MOBILE_REGEX.is_match(&values.mobile))
                    .then_some(FieldError::Format("Enter a valid 10-digit mobile number"))
            }),
            FieldName::Dob => values
                .dob
                .is_none()
                .then_some(FieldError::Required("Date of Birth is required")),
            FieldName::Gender => values
                .gender
                .is_none()
                .then_some(FieldError::Required("Gender is required")),
            FieldName::Email => required_text(&values.email, "Email is required").or_else(|| {
                (!EMAIL_REGEX.is_match(&values.email)).then_some(FieldError::Format("Invalid email"))
            }),
            FieldName::Course => values
                .course
                .is_none()
                .then_some(FieldError::Required("Course is required")),
            FieldName::Address => required_text(&values.address, "Address is required"),
        }
    }
}

impl ValidationSchema for RegistrationSchema {
    fn validate(&self, values: &FormValues) -> ErrorMap {
        FieldName::ALL
            .iter()
            .filter_map(|field| self.validate_field(values, *field).map(|e| (*field, e)))
            .collect()
    }
}

fn required_text(value: &str, message: &'static str) -> Option<FieldError> {
    value.is_empty().then_some(FieldError::Required(message))
}
