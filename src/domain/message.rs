//! Notification messages and their text templates.

use chrono::{DateTime, Utc};

use super::id::ChatId;

/// A text message addressed to one chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub chat_id: ChatId,
    pub text: String,
}

impl NotificationMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
        }
    }
}

/// Format a dollar amount with two decimals, e.g. `$123.46`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Greeting sent once when the process starts.
#[must_use]
pub fn welcome_text(symbol: &str, started_at: DateTime<Utc>) -> String {
    format!(
        "🤖 Bot started!\n\
        \n\
        📈 Pair: {symbol}\n\
        🕒 {}",
        started_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Result of the balance check: the formatted margin, or a failure notice.
#[must_use]
pub fn balance_text(asset: &str, available_margin: Option<f64>) -> String {
    match available_margin {
        Some(amount) => format!(
            "💰 Available balance: {} {asset}",
            format_usd(amount)
        ),
        None => format!("⚠️ Could not obtain the {asset} balance."),
    }
}

/// Announcement sent before entering the idle loop.
#[must_use]
pub fn analysis_started_text(symbol: &str) -> String {
    format!("📊 Starting market analysis for {symbol}...")
}
