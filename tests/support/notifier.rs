use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marginbell::domain::NotificationMessage;
use marginbell::error::NotifyError;
use marginbell::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<NotificationMessage>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records every attempt but reports failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }

    pub fn messages(&self) -> Vec<NotificationMessage> {
        self.messages.lock().expect("lock notifier messages").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(message.clone());
        if self.fail {
            return Err(NotifyError::InvalidChatId(message.chat_id.to_string()));
        }
        Ok(())
    }
}
