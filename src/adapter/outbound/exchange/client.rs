//! Exchange REST client for the account balance endpoint.
//!
//! Sends a single GET with the API key in a header. Every request is bounded
//! by the configured timeouts and is never retried.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::dto::BalanceResponse;
use crate::config::Config;
use crate::error::{ExchangeError, Result};
use crate::port::BalanceSource;

/// Longest response body kept in a status error.
const MAX_ERROR_BODY: usize = 256;

/// HTTP client for the exchange balance endpoint.
pub struct ExchangeClient {
    http: HttpClient,
    balance_url: String,
    api_key_header: String,
    api_key: String,
    asset: String,
}

impl ExchangeClient {
    /// Build a client from configuration.
    ///
    /// Fails when `EXCHANGE_API_KEY` is not set or the HTTP client cannot be
    /// built.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        let http = HttpClient::builder()
            .timeout(config.http.timeout())
            .connect_timeout(config.http.connect_timeout())
            .build()
            .map_err(ExchangeError::Transport)?;

        info!(
            url = %config.exchange.balance_url,
            asset = %config.exchange.asset,
            timeout_ms = config.http.timeout_ms,
            "Exchange client ready"
        );

        Ok(Self {
            http,
            balance_url: config.exchange.balance_url.clone(),
            api_key_header: config.exchange.api_key_header.clone(),
            api_key,
            asset: config.exchange.asset.clone(),
        })
    }

    /// Fetch and decode the balance response.
    pub async fn fetch_balance(&self) -> std::result::Result<BalanceResponse, ExchangeError> {
        debug!(url = %self.balance_url, "Fetching account balance");

        let response = self
            .http
            .get(&self.balance_url)
            .header(self.api_key_header.as_str(), self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            truncate_in_place(&mut body, MAX_ERROR_BODY);
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: BalanceResponse = serde_json::from_str(&body).map_err(ExchangeError::Decode)?;
        debug!(assets = parsed.data.len(), "Balance response decoded");

        Ok(parsed)
    }
}

#[async_trait]
impl BalanceSource for ExchangeClient {
    fn asset(&self) -> &str {
        &self.asset
    }

    async fn available_margin(&self) -> std::result::Result<Option<f64>, ExchangeError> {
        self.fetch_balance().await?.available_margin(&self.asset)
    }
}

fn truncate_in_place(s: &mut String, max: usize) {
    if s.len() > max {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
}
