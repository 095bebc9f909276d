//! Form domain layer
//!
//! Typed registration values, the validation schema, and the controller that
//! tracks touched fields and gates submission.

mod controller;
mod field;
mod schema;
mod values;

pub use controller::{FormStateController, SubmitError, SubmitPhase};
pub use field::{cycle_option, format_date, parse_date, Course, FieldName, FieldValue, Gender};
pub use values::FormValues;
