//! Notifier port for outbound messages.

use async_trait::async_trait;

use crate::domain::NotificationMessage;
use crate::error::NotifyError;

/// Delivers messages to a chat. One attempt per call, no retries.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}
