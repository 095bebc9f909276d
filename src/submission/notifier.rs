//! Sink that forwards confirmations to the UI

use super::summary::format_summary;
use super::traits::SubmissionSink;
use crate::state::FormValues;
use async_trait::async_trait;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Formats a confirmation for each accepted registration and sends it to the
/// app's event loop
#[derive(Debug, Clone)]
pub struct ConfirmationNotifier {
    tx: UnboundedSender<String>,
}

impl ConfirmationNotifier {
    /// Create a notifier and the receiver the UI drains
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl SubmissionSink for ConfirmationNotifier {
    async fn on_valid_submit(&self, values: &FormValues) {
        let summary = format_summary(values);
        if self.tx.send(summary).is_err() {
            tracing::warn!("Confirmation receiver dropped; summary not displayed");
        }
    }
}
