//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for various notification backends.

#[cfg(feature = "telegram")]
pub mod telegram;


use async_trait::async_trait;
use tracing::info;

use crate::domain::NotificationMessage;
use crate::error::NotifyError;
use crate::port::Notifier;

/// A logging notifier that writes messages via tracing instead of sending them.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        info!(
            chat_id = %message.chat_id,
            text = %message.text,
            "Notification (not sent)"
        );
        Ok(())
    }
}
