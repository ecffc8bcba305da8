use std::net::SocketAddr;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors from the exchange balance query.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("balance request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("balance request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("exchange returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed balance response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid available margin for {asset}: {value}")]
    InvalidMargin { asset: String, value: String },
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::Timeout(err)
        } else {
            ExchangeError::Transport(err)
        }
    }
}

/// Errors from delivering a notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[cfg(feature = "telegram")]
    #[error("telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("invalid chat id '{0}'")]
    InvalidChatId(String),

    /// teloxide pins its own reqwest, so the builder error is kept as text.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("failed to bind liveness listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Server(#[source] std::io::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
