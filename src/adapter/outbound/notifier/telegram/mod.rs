//! Telegram notification delivery.

mod notifier;

pub use notifier::TelegramNotifier;
