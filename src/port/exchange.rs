//! Exchange port for account balance queries.

use async_trait::async_trait;

use crate::error::ExchangeError;

/// Source of the account's available margin.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Asset code the margin is reported for.
    fn asset(&self) -> &str;

    /// Query the available margin once.
    ///
    /// Returns `Ok(None)` when the response does not list the asset.
    async fn available_margin(&self) -> Result<Option<f64>, ExchangeError>;
}
