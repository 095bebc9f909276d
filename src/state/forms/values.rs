//! Registration form values

use super::field::{FieldKind, FieldName, FieldValue};
use super::field::{Course, Gender};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value of the wrong kind was offered for a field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` expects a {expected} value, got {actual}")]
pub struct FieldTypeMismatch {
    pub field: FieldName,
    pub expected: FieldKind,
    pub actual: FieldKind,
}

/// Typed record of every field on the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub mobile: String,
    pub dob: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub email: String,
    pub course: Option<Course>,
    pub address: String,
}

impl FormValues {
    /// Read a field as a tagged value
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Name => FieldValue::Text(self.name.clone()),
            FieldName::Mobile => FieldValue::Text(self.mobile.clone()),
            FieldName::Dob => FieldValue::Date(self.dob),
            FieldName::Gender => FieldValue::Gender(self.gender),
            FieldName::Email => FieldValue::Text(self.email.clone()),
            FieldName::Course => FieldValue::Course(self.course),
            FieldName::Address => FieldValue::Text(self.address.clone()),
        }
    }

    /// Borrow a text field, `None` for non-text fields
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Mobile => Some(&self.mobile),
            FieldName::Email => Some(&self.email),
            FieldName::Address => Some(&self.address),
            FieldName::Dob | FieldName::Gender | FieldName::Course => None,
        }
    }

    /// Write a field; the value kind must match the field
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), FieldTypeMismatch> {
        match (field, value) {
            (FieldName::Name, FieldValue::Text(s)) => self.name = s,
            (FieldName::Mobile, FieldValue::Text(s)) => self.mobile = s,
            (FieldName::Email, FieldValue::Text(s)) => self.email = s,
            (FieldName::Address, FieldValue::Text(s)) => self.address = s,
            (FieldName::Dob, FieldValue::Date(d)) => self.dob = d,
            (FieldName::Gender, FieldValue::Gender(g)) => self.gender = g,
            (FieldName::Course, FieldValue::Course(c)) => self.course = c,
            (field, value) => {
                return Err(FieldTypeMismatch {
                    field,
                    expected: field.kind(),
                    actual: value.kind(),
                })
            }
        }
        Ok(())
    }
}
