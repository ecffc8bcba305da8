//! Handler for `check telegram`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::config::{mask_secret, Config};
use crate::error::Result;

/// Send a Telegram test message.
#[cfg(feature = "telegram")]
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
    use crate::domain::NotificationMessage;
    use crate::port::Notifier;

    let config = Config::load_or_default(config_path)?;
    let notifier = TelegramNotifier::from_config(&config)?;
    let (token, chat_id) = config.require_telegram()?;

    output::section("Telegram Check");
    output::field("Bot token", mask_secret(token));
    output::field("Chat ID", chat_id);

    let message = NotificationMessage::new(
        chat_id,
        format!(
            "🧪 marginbell test message\n\nSymbol: {}\nAsset: {}",
            config.exchange.symbol, config.exchange.asset
        ),
    );
    notifier.send(&message).await?;

    output::success("Telegram test message sent");
    Ok(())
}

#[cfg(not(feature = "telegram"))]
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let (token, chat_id) = config.require_telegram()?;

    output::section("Telegram Check");
    output::field("Bot token", mask_secret(token));
    output::field("Chat ID", chat_id);
    output::warning("built without the telegram feature; nothing sent");
    Ok(())
}
