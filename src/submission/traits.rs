//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;

/// Receives form values that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Called exactly once per accepted submission, before the form resets
    async fn on_valid_submit(&self, values: &FormValues);
}
