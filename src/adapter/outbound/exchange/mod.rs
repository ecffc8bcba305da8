//! Exchange adapter: account balance over REST.

mod client;
mod dto;

pub use client::ExchangeClient;
pub use dto::{AssetBalance, BalanceResponse, RawAmount};
