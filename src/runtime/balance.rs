use tracing::{info, warn};

use crate::port::BalanceSource;

/// Query the available margin once, logging instead of failing.
///
/// Any transport, status, or decoding error yields `None`, as does a
/// response that does not list the asset.
pub async fn check_balance(source: &dyn BalanceSource) -> Option<f64> {
    let asset = source.asset();

    match source.available_margin().await {
        Ok(Some(margin)) => {
            info!(asset, margin, "Available margin fetched");
            Some(margin)
        }
        Ok(None) => {
            warn!(asset, "Asset not listed in balance response");
            None
        }
        Err(e) => {
            warn!(asset, error = %e, "Balance check failed");
            None
        }
    }
}
