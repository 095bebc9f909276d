//! Delivery of accepted registrations
//!
//! The form controller hands every valid submission to a [`SubmissionSink`].
//! The terminal app uses [`ConfirmationNotifier`], which formats a summary and
//! forwards it to the UI for display.

mod notifier;
mod summary;
mod traits;

pub use notifier::ConfirmationNotifier;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
