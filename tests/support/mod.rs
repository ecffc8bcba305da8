#![allow(dead_code)]

pub mod exchange;
pub mod notifier;

use marginbell::config::Config;

/// Configuration pointing at a local balance endpoint, with short timeouts.
pub fn config_for(balance_url: &str) -> Config {
    let mut config = Config::default();
    config.exchange.balance_url = balance_url.to_string();
    config.exchange.api_key = Some("test-api-key".into());
    config.telegram.chat_id = "42".into();
    config.server.host = "127.0.0.1".into();
    config.http.timeout_ms = 500;
    config.http.connect_timeout_ms = 500;
    config
}
