//! Balance endpoint response types.
//!
//! Example response:
//! ```json
//! {"code":0,"data":[{"asset":"USDT","balance":"150.2","availableMargin":"123.456"}]}
//! ```
//!
//! `availableMargin` is usually sent as a string, but some deployments send
//! a bare number; both are accepted. Records for other assets are not
//! validated, so a missing or `null` margin elsewhere does not hide the
//! target asset.

use serde::Deserialize;

use crate::error::ExchangeError;

#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    pub data: Vec<AssetBalance>,
}

#[derive(Debug, Deserialize)]
pub struct AssetBalance {
    #[serde(default)]
    pub asset: String,
    #[serde(rename = "availableMargin", default)]
    pub available_margin: Option<RawAmount>,
}

/// Numeric field that may arrive as a JSON string or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAmount {
    /// Parse into a finite, non-negative value.
    fn to_margin(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
            Self::Other(_) => return None,
        };
        (value.is_finite() && value >= 0.0).then_some(value)
    }

    fn display(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Other(v) => v.to_string(),
        }
    }
}

impl BalanceResponse {
    /// Available margin of the first record whose asset code equals `asset`.
    ///
    /// `Ok(None)` when no record matches; an error when the matching record
    /// carries a value that is not a finite non-negative number.
    pub fn available_margin(&self, asset: &str) -> Result<Option<f64>, ExchangeError> {
        let Some(record) = self.data.iter().find(|b| b.asset == asset) else {
            return Ok(None);
        };

        let invalid = |value: String| ExchangeError::InvalidMargin {
            asset: record.asset.clone(),
            value,
        };
        let raw = record
            .available_margin
            .as_ref()
            .ok_or_else(|| invalid("missing".into()))?;

        raw.to_margin()
            .map(Some)
            .ok_or_else(|| invalid(raw.display()))
    }
}
