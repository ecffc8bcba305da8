//! Telegram message delivery.
//!
//! Provides the [`TelegramNotifier`], which sends plain-text messages through
//! the Bot API. Each send is a single request bounded by the configured HTTP
//! timeouts; failures are returned to the caller and never retried.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId as TelegramChatId, Recipient};
use tracing::{debug, info};

use crate::config::{Config, HttpConfig};
use crate::domain::{ChatId, NotificationMessage};
use crate::error::{NotifyError, Result};
use crate::port::Notifier;

/// Telegram notifier backed by a teloxide [`Bot`].
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    /// Create a notifier for the given bot token.
    pub fn new(bot_token: &str, http: &HttpConfig) -> std::result::Result<Self, NotifyError> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(http.timeout())
            .connect_timeout(http.connect_timeout())
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            bot: Bot::with_client(bot_token, client),
        })
    }

    /// Create a notifier from configuration.
    ///
    /// Fails when `TELEGRAM_BOT_TOKEN` or `TELEGRAM_CHAT_ID` is not set, or the
    /// chat id is neither numeric nor an `@channel` username.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &Config) -> Result<Self> {
        let (token, chat_id) = config.require_telegram()?;
        recipient(&ChatId::new(chat_id))?;

        let notifier = Self::new(token, &config.http)?;
        info!(chat_id = %chat_id, "Telegram notifier ready");
        Ok(notifier)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &NotificationMessage) -> std::result::Result<(), NotifyError> {
        let to = recipient(&message.chat_id)?;
        self.bot.send_message(to, message.text.as_str()).await?;
        debug!(chat_id = %message.chat_id, "Telegram message sent");
        Ok(())
    }
}

/// Map a chat id onto a Bot API recipient.
pub(crate) fn recipient(chat_id: &ChatId) -> std::result::Result<Recipient, NotifyError> {
    if let Some(id) = chat_id.as_numeric() {
        Ok(Recipient::Id(TelegramChatId(id)))
    } else if chat_id.is_username() {
        Ok(Recipient::ChannelUsername(chat_id.as_str().to_string()))
    } else {
        Err(NotifyError::InvalidChatId(chat_id.to_string()))
    }
}
