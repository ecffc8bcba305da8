//! Handler for `check balance`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::exchange::ExchangeClient;
use crate::config::Config;
use crate::domain::format_usd;
use crate::error::Result;
use crate::port::BalanceSource;

/// Query the exchange once and print the available margin.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let client = ExchangeClient::from_config(&config)?;

    output::section("Balance Check");
    output::field("Endpoint", &config.exchange.balance_url);
    output::field("Asset", client.asset());

    match client.available_margin().await? {
        Some(margin) => {
            output::success(&format!("Available margin: {}", format_usd(margin)));
        }
        None => {
            output::warning(&format!(
                "{} is not listed in the balance response",
                client.asset()
            ));
        }
    }

    Ok(())
}
