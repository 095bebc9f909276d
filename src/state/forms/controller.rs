//! Form state management for the registration form

use super::field::{FieldName, FieldValue};
use super::schema::{ErrorMap, RegistrationSchema, ValidationSchema};
use super::values::{FieldTypeMismatch, FormValues};
use crate::submission::SubmissionSink;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more fields failed validation
    #[error("{} field(s) failed validation", .0.len())]
    Rejected(ErrorMap),
    /// Another submission has not finished yet
    #[error("a submission is already in progress")]
    InProgress,
}

/// Record of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

/// Where the controller is in the submission cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    /// The last attempt failed validation; cleared by the next change
    Rejected,
}

/// Aggregate state owned by the controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub touched: BTreeSet<FieldName>,
    pub errors: ErrorMap,
    pub is_submitting: bool,
}

/// Owns the registration form's values, touched flags and errors.
///
/// The error map is only ever written by re-running the schema over the
/// current values. Whether an error is shown is derived on every read.
#[derive(Debug, Clone, Default)]
pub struct FormStateController<S = RegistrationSchema> {
    schema: S,
    state: FormState,
    phase: SubmitPhase,
}

impl FormStateController {
    pub fn new() -> Self {
        Self::with_schema(RegistrationSchema)
    }
}

impl<S: ValidationSchema> FormStateController<S> {
    /// Create a controller with a custom rule set
    pub fn with_schema(schema: S) -> Self {
        Self {
            schema,
            state: FormState::default(),
            phase: SubmitPhase::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.state.touched.contains(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Store a new value, mark the field touched and revalidate every field
    pub fn on_field_change(
        &mut self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(), FieldTypeMismatch> {
        if let Err(err) = self.state.values.set(field, value) {
            tracing::warn!("Ignoring change: {err}");
            return Err(err);
        }
        self.state.touched.insert(field);
        self.revalidate();
        if self.phase == SubmitPhase::Rejected {
            self.phase = SubmitPhase::Idle;
        }
        tracing::debug!(
            field = field.key(),
            invalid = self.state.errors.len(),
            "Field changed"
        );
        Ok(())
    }

    /// Mark a field touched when focus leaves it
    pub fn on_field_blur(&mut self, field: FieldName) {
        if self.state.touched.insert(field) {
            tracing::debug!(field = field.key(), "Field touched on blur");
        }
        self.revalidate();
    }

    /// Error to show for a field: touched and invalid, otherwise `None`
    pub fn display_error(&self, field: FieldName) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().message(field)
    }

    /// Validate everything and hand valid values to the sink.
    ///
    /// On rejection values and touched flags are kept so the errors render.
    /// On acceptance the sink is awaited once and the form is reset.
    pub async fn submit<K>(&mut self, sink: &K) -> Result<SubmitReceipt, SubmitError>
    where
        K: SubmissionSink + ?Sized,
    {
        if self.state.is_submitting {
            tracing::warn!("Submit ignored while a submission is in flight");
            return Err(SubmitError::InProgress);
        }

        self.state.touched.extend(FieldName::ALL);
        self.revalidate();

        if !self.state.errors.is_empty() {
            self.state.is_submitting = false;
            self.phase = SubmitPhase::Rejected;
            tracing::debug!(
                invalid = self.state.errors.len(),
                "Submission rejected"
            );
            return Err(SubmitError::Rejected(self.state.errors.clone()));
        }

        self.state.is_submitting = true;
        self.phase = SubmitPhase::Submitting;
        let receipt = SubmitReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values: self.state.values.clone(),
        };

        sink.on_valid_submit(&receipt.values).await;

        self.reset();
        tracing::info!(
            receipt = %serde_json::to_string(&receipt).unwrap_or_default(),
            "Registration submitted"
        );
        Ok(receipt)
    }

    /// Restore the initial empty form
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.phase = SubmitPhase::Idle;
    }

    fn revalidate(&mut self) {
        self.state.errors = self.schema.validate(&self.state.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{Course, Gender};
    use crate::state::forms::schema::FieldError;
    use crate::submission::MockSubmissionSink;
    use chrono::NaiveDate;

    fn asha_values() -> FormValues {
        FormValues {
            name: "Asha".to_string(),
            mobile: "9876543210".to_string(),
            dob: NaiveDate::from_ymd_opt(2004, 8, 15),
            gender: Some(Gender::Female),
            email: "asha@example.com".to_string(),
            course: Some(Course::Biology),
            address: "12 Main St".to_string(),
        }
    }

    fn fill(controller: &mut FormStateController, values: &FormValues) {
        for field in FieldName::ALL {
            controller
                .on_field_change(field, values.get(field))
                .unwrap();
        }
    }

    fn unused_sink() -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_on_valid_submit().never();
        sink
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_at_defaults() {
            let controller = FormStateController::new();
            assert_eq!(controller.state(), &FormState::default());
            assert_eq!(controller.phase(), SubmitPhase::Idle);
            assert!(!controller.is_submitting());
            for field in FieldName::ALL {
                assert!(!controller.is_touched(field));
                assert_eq!(controller.display_error(field), None);
            }
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut controller = FormStateController::new();
            controller
                .on_field_change(FieldName::Name, "Asha".into())
                .unwrap();
            controller.on_field_blur(FieldName::Email);
            controller.reset();
            assert_eq!(controller.state(), &FormState::default());
        }
    }

    mod change_and_blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_change_sets_value_and_touches() {
            let mut controller = FormStateController::new();
            controller
                .on_field_change(FieldName::Name, "Asha".into())
                .unwrap();
            assert_eq!(controller.values().name, "Asha");
            assert!(controller.is_touched(FieldName::Name));
            assert!(!controller.is_touched(FieldName::Mobile));
        }

        #[test]
        fn test_change_revalidates_every_field() {
            let mut controller = FormStateController::new();
            controller
                .on_field_change(FieldName::Name, "Asha".into())
                .unwrap();
            // untouched fields are validated but hidden
            assert_eq!(controller.errors().len(), 6);
            assert!(controller.errors().get(FieldName::Name).is_none());
            assert_eq!(controller.display_error(FieldName::Mobile), None);
        }

        #[test]
        fn test_email_error_hidden_until_touched() {
            let mut controller = FormStateController::new();
            controller
                .on_field_change(FieldName::Name, "Asha".into())
                .unwrap();
            assert!(controller.errors().get(FieldName::Email).is_some());
            assert_eq!(controller.display_error(FieldName::Email), None);

            controller
                .on_field_change(FieldName::Email, "bad".into())
                .unwrap();
            assert_eq!(controller.display_error(FieldName::Email), Some("Invalid email"));
        }

        #[test]
        fn test_fixing_a_field_clears_its_display_error() {
            let mut controller = FormStateController::new();
            controller
                .on_field_change(FieldName::Mobile, "12345".into())
                .unwrap();
            assert_eq!(
                controller.display_error(FieldName::Mobile),
                Some("Enter a valid 10-digit mobile number")
            );
            controller
                .on_field_change(FieldName::Mobile, "1234567890".into())
                .unwrap();
            assert_eq!(controller.display_error(FieldName::Mobile), None);
        }

        #[test]
        fn test_blur_touches_and_shows_required() {
            let mut controller = FormStateController::new();
            controller.on_field_blur(FieldName::Address);
            assert!(controller.is_touched(FieldName::Address));
            assert_eq!(
                controller.display_error(FieldName::Address),
                Some("Address is required")
            );
        }

        #[test]
        fn test_blur_is_idempotent() {
            let mut controller = FormStateController::new();
            controller.on_field_blur(FieldName::Name);
            let before = controller.state().clone();
            controller.on_field_blur(FieldName::Name);
            assert_eq!(controller.state(), &before);
        }

        #[test]
        fn test_type_mismatch_leaves_state_untouched() {
            let mut controller = FormStateController::new();
            let err = controller
                .on_field_change(FieldName::Gender, "female".into())
                .unwrap_err();
            assert_eq!(err.field, FieldName::Gender);
            assert_eq!(controller.state(), &FormState::default());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_form_is_rejected_with_seven_errors() {
            let mut controller = FormStateController::new();
            let sink = unused_sink();

            let err = controller.submit(&sink).await.unwrap_err();

            let SubmitError::Rejected(errors) = err else {
                panic!("expected rejection");
            };
            assert_eq!(errors.len(), 7);
            for field in FieldName::ALL {
                assert!(controller.is_touched(field));
                assert!(controller.display_error(field).is_some());
            }
            assert_eq!(controller.values(), &FormValues::default());
            assert_eq!(controller.phase(), SubmitPhase::Rejected);
            assert!(!controller.is_submitting());
        }

        #[tokio::test]
        async fn test_rejection_keeps_entered_values() {
            let mut controller = FormStateController::new();
            controller
                .on_field_change(FieldName::Name, "Asha".into())
                .unwrap();
            let sink = unused_sink();

            let err = controller.submit(&sink).await.unwrap_err();

            assert!(matches!(err, SubmitError::Rejected(ref e) if e.len() == 6));
            assert_eq!(controller.values().name, "Asha");
            assert_eq!(controller.display_error(FieldName::Name), None);
        }

        #[tokio::test]
        async fn test_valid_form_calls_sink_once_and_resets() {
            let mut controller = FormStateController::new();
            fill(&mut controller, &asha_values());

            let mut sink = MockSubmissionSink::new();
            sink.expect_on_valid_submit()
                .withf(|values| *values == asha_values())
                .times(1)
                .return_const(());

            let receipt = controller.submit(&sink).await.unwrap();

            assert_eq!(receipt.values, asha_values());
            assert_eq!(controller.state(), &FormState::default());
            assert_eq!(controller.phase(), SubmitPhase::Idle);
        }

        #[tokio::test]
        async fn test_change_after_rejection_returns_to_idle() {
            let mut controller = FormStateController::new();
            let sink = unused_sink();
            let _ = controller.submit(&sink).await;
            assert_eq!(controller.phase(), SubmitPhase::Rejected);

            controller
                .on_field_change(FieldName::Name, "A".into())
                .unwrap();
            assert_eq!(controller.phase(), SubmitPhase::Idle);
        }

        #[tokio::test]
        async fn test_resubmit_after_fixing_succeeds() {
            let mut controller = FormStateController::new();
            let mut values = asha_values();
            values.mobile = "12345".to_string();
            fill(&mut controller, &values);

            let err = controller.submit(&unused_sink()).await.unwrap_err();
            let SubmitError::Rejected(errors) = err else {
                panic!("expected rejection");
            };
            assert_eq!(
                errors.get(FieldName::Mobile),
                Some(&FieldError::Format("Enter a valid 10-digit mobile number"))
            );

            controller
                .on_field_change(FieldName::Mobile, "9876543210".into())
                .unwrap();
            let mut sink = MockSubmissionSink::new();
            sink.expect_on_valid_submit().times(1).return_const(());
            assert!(controller.submit(&sink).await.is_ok());
        }

        #[tokio::test]
        async fn test_submit_while_in_flight_is_refused() {
            let mut controller = FormStateController::new();
            fill(&mut controller, &asha_values());
            controller.state.is_submitting = true;

            let err = controller.submit(&unused_sink()).await.unwrap_err();

            assert_eq!(err, SubmitError::InProgress);
            assert_eq!(controller.values(), &asha_values());
        }

        #[test]
        fn test_rejected_error_message() {
            let errors = RegistrationSchema.validate(&FormValues::default());
            let err = SubmitError::Rejected(errors);
            assert_eq!(err.to_string(), "7 field(s) failed validation");
        }
    }

    mod custom_schema {
        use super::*;
        use pretty_assertions::assert_eq;

        struct NameOnly;

        impl ValidationSchema for NameOnly {
            fn validate(&self, values: &FormValues) -> ErrorMap {
                let mut errors = ErrorMap::new();
                if values.name.is_empty() {
                    errors.insert(FieldName::Name, FieldError::Required("Name please"));
                }
                errors
            }
        }

        #[tokio::test]
        async fn test_controller_uses_supplied_schema() {
            let mut controller = FormStateController::with_schema(NameOnly);
            controller
                .on_field_change(FieldName::Name, "Asha".into())
                .unwrap();

            let mut sink = MockSubmissionSink::new();
            sink.expect_on_valid_submit().times(1).return_const(());
            let receipt = controller.submit(&sink).await.unwrap();
            assert_eq!(receipt.values.name, "Asha");
        }

        struct SilentName;

        impl ValidationSchema for SilentName {
            fn validate(&self, values: &FormValues) -> ErrorMap {
                let mut errors = ErrorMap::new();
                errors.insert(FieldName::Name, FieldError::Required(""));
                if values.email.is_empty() {
                    errors.insert(FieldName::Email, FieldError::Required("Email please"));
                }
                errors
            }
        }

        #[tokio::test]
        async fn test_rejection_counts_only_shown_errors() {
            let mut controller = FormStateController::with_schema(SilentName);
            let err = controller.submit(&unused_sink()).await.unwrap_err();
            assert_eq!(err.to_string(), "1 field(s) failed validation");
            assert_eq!(controller.display_error(FieldName::Name), None);
            assert_eq!(controller.display_error(FieldName::Email), Some("Email please"));
        }

        #[tokio::test]
        async fn test_empty_messages_do_not_block_submit() {
            let mut controller = FormStateController::with_schema(SilentName);
            controller
                .on_field_change(FieldName::Email, "asha@example.com".into())
                .unwrap();

            let mut sink = MockSubmissionSink::new();
            sink.expect_on_valid_submit().times(1).return_const(());
            assert!(controller.submit(&sink).await.is_ok());
        }
    }
}
