//! Form field value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-facing date format for the date of birth field
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The fixed set of fields on the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Mobile,
    Dob,
    Gender,
    Email,
    Course,
    Address,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Mobile,
        FieldName::Dob,
        FieldName::Gender,
        FieldName::Email,
        FieldName::Course,
        FieldName::Address,
    ];

    /// Stable key used in logs and serialized values
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Mobile => "mobile",
            Self::Dob => "dob",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::Course => "course",
            Self::Address => "address",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Mobile => "Mobile",
            Self::Dob => "Date of Birth",
            Self::Gender => "Gender",
            Self::Email => "Email",
            Self::Course => "Course",
            Self::Address => "Address",
        }
    }

    /// Kind of value this field accepts
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::Mobile | Self::Email | Self::Address => FieldKind::Text,
            Self::Dob => FieldKind::Date,
            Self::Gender => FieldKind::Gender,
            Self::Course => FieldKind::Course,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Address)
    }

    /// Position of the field in display order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Discriminant of [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Gender,
    Course,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Gender => "gender",
            Self::Course => "course",
        };
        f.write_str(name)
    }
}

/// Gender radio options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];

    /// Value submitted with the form
    pub fn value(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
        }
    }
}

/// Course dropdown options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Biology,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Commerce,
    Humanities,
}

impl Course {
    pub const ALL: [Course; 4] = [
        Course::Biology,
        Course::ComputerScience,
        Course::Commerce,
        Course::Humanities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Biology => "Biology",
            Self::ComputerScience => "Computer Science",
            Self::Commerce => "Commerce",
            Self::Humanities => "Humanities",
        }
    }
}

/// Step through a fixed option list, starting from nothing selected.
///
/// Moving forward from `None` selects the first option and moving backward
/// selects the last; both directions wrap.
pub fn cycle_option<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let last = options.len() - 1;
    let next = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None if forward => 0,
        None => last,
        Some(i) if forward => (i + 1) % options.len(),
        Some(0) => last,
        Some(i) => i - 1,
    };
    options.get(next).copied()
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(Option<NaiveDate>),
    Gender(Option<Gender>),
    Course(Option<Course>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Gender(_) => FieldKind::Gender,
            FieldValue::Course(_) => FieldKind::Course,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Date(d) => format_date(*d),
            FieldValue::Gender(g) => g.map(|g| g.label().to_string()).unwrap_or_default(),
            FieldValue::Course(c) => c.map(|c| c.label().to_string()).unwrap_or_default(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Format an optional date as `DD/MM/YYYY`, empty when absent
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a `DD/MM/YYYY` draft; anything incomplete or invalid is absent
pub fn parse_date(draft: &str) -> Option<NaiveDate> {
    let draft = draft.trim();
    // chrono accepts single-digit day/month, the input mask does not
    if draft.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(draft, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;

        #[test]
        fn test_all_in_display_order() {
            let keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
            assert_eq!(
                keys,
                vec!["name", "mobile", "dob", "gender", "email", "course", "address"]
            );
        }

        #[test]
        fn test_index_round_trip() {
            for (i, field) in FieldName::ALL.iter().enumerate() {
                assert_eq!(field.index(), i);
                assert_eq!(FieldName::from_index(i), Some(*field));
            }
            assert_eq!(FieldName::from_index(7), None);
        }

        #[test]
        fn test_only_address_is_multiline() {
            let multiline: Vec<_> = FieldName::ALL
                .iter()
                .filter(|f| f.is_multiline())
                .collect();
            assert_eq!(multiline, vec![&FieldName::Address]);
        }

        #[test]
        fn test_kinds() {
            assert_eq!(FieldName::Dob.kind(), FieldKind::Date);
            assert_eq!(FieldName::Gender.kind(), FieldKind::Gender);
            assert_eq!(FieldName::Course.kind(), FieldKind::Course);
            assert_eq!(FieldName::Email.kind(), FieldKind::Text);
        }

        #[test]
        fn test_serializes_as_key() {
            let json = serde_json::to_string(&FieldName::Dob).unwrap();
            assert_eq!(json, "\"dob\"");
        }
    }

    mod options {
        use super::*;

        #[test]
        fn test_cycle_forward_from_none_selects_first() {
            assert_eq!(cycle_option(&Gender::ALL, None, true), Some(Gender::Female));
        }

        #[test]
        fn test_cycle_backward_from_none_selects_last() {
            assert_eq!(
                cycle_option(&Course::ALL, None, false),
                Some(Course::Humanities)
            );
        }

        #[test]
        fn test_cycle_wraps() {
            assert_eq!(
                cycle_option(&Gender::ALL, Some(Gender::Other), true),
                Some(Gender::Female)
            );
            assert_eq!(
                cycle_option(&Gender::ALL, Some(Gender::Female), false),
                Some(Gender::Other)
            );
        }

        #[test]
        fn test_course_serializes_with_label() {
            let json = serde_json::to_string(&Course::ComputerScience).unwrap();
            assert_eq!(json, "\"Computer Science\"");
        }

        #[test]
        fn test_gender_value() {
            assert_eq!(Gender::Female.value(), "female");
            assert_eq!(Gender::Male.label(), "Male");
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn test_parse_full_date() {
            assert_eq!(
                parse_date("05/03/2004"),
                NaiveDate::from_ymd_opt(2004, 3, 5)
            );
        }

        #[test]
        fn test_parse_partial_is_none() {
            assert_eq!(parse_date("05/03/20"), None);
            assert_eq!(parse_date("5/3/2004"), None);
            assert_eq!(parse_date(""), None);
        }

        #[test]
        fn test_parse_invalid_calendar_date_is_none() {
            assert_eq!(parse_date("31/02/2004"), None);
        }

        #[test]
        fn test_format_date() {
            let date = NaiveDate::from_ymd_opt(2001, 12, 9);
            assert_eq!(format_date(date), "09/12/2001");
            assert_eq!(format_date(None), "");
        }

        #[test]
        fn test_display_value_for_date() {
            let value = FieldValue::Date(NaiveDate::from_ymd_opt(1999, 1, 2));
            assert_eq!(value.display_value(), "02/01/1999");
        }
    }
}
