//! Handler for `check config`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::config::{mask_secret, Config, ENV_API_KEY, ENV_BOT_TOKEN, ENV_CHAT_ID};
use crate::error::Result;

/// Validate configuration without starting anything.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Configuration");

    if path.exists() {
        output::field("File", path.display());
    } else {
        output::field("File", format!("{} (not found, using defaults)", path.display()));
    }

    let config = Config::load_or_default(path)?;
    output::success("Configuration is valid");

    output::field("Balance URL", &config.exchange.balance_url);
    output::field("Key header", &config.exchange.api_key_header);
    output::field("Asset", &config.exchange.asset);
    output::field("Symbol", &config.exchange.symbol);
    output::field("Listener", format!("{}:{}", config.server.host, config.server.port));
    output::field(
        "Idle interval",
        format!("{}s", config.sequence.idle_interval_secs),
    );
    output::field("HTTP timeout", format!("{}ms", config.http.timeout_ms));

    output::section("Credentials");
    match config.exchange.api_key.as_deref() {
        Some(key) => output::field("API key", mask_secret(key)),
        None => output::warning(&format!("{ENV_API_KEY} is not set")),
    }
    match config.exchange.api_secret.as_deref() {
        Some(secret) => output::field("API secret", mask_secret(secret)),
        None => output::field("API secret", "not set"),
    }
    match config.telegram.bot_token.as_deref() {
        Some(token) => output::field("Bot token", mask_secret(token)),
        None => output::warning(&format!("{ENV_BOT_TOKEN} is not set")),
    }
    if config.telegram.chat_id.is_empty() {
        output::warning(&format!("{ENV_CHAT_ID} is not set"));
    } else {
        output::field("Chat ID", &config.telegram.chat_id);
    }

    if config.exchange.api_key.is_none() || config.require_telegram().is_err() {
        output::hint("set the missing variables in the environment or a .env file");
    }

    Ok(())
}
