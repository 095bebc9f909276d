//! Human-readable confirmation text

use crate::state::{format_date, FormValues};

/// Build the confirmation shown after a successful registration
pub fn format_summary(values: &FormValues) -> String {
    let gender = values.gender.map(|g| g.value()).unwrap_or_default();
    let course = values.course.map(|c| c.label()).unwrap_or_default();
    format!(
        "Form Submitted Successfully!!\n\
         Name: {}\n\
         Mobile: {}\n\
         Date of Birth: {}\n\
         Gender: {}\n\
         Email: {}\n\
         Course: {}\n\
         Address: {}",
        values.name,
        values.mobile,
        format_date(values.dob),
        gender,
        values.email,
        course,
        values.address,
    )
}
