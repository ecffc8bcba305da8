//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file with environment
//! variable overrides. Secrets (`EXCHANGE_API_KEY`, `EXCHANGE_API_SECRET`,
//! `TELEGRAM_BOT_TOKEN`) are only ever read from the environment.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

pub const ENV_API_KEY: &str = "EXCHANGE_API_KEY";
pub const ENV_API_SECRET: &str = "EXCHANGE_API_SECRET";
pub const ENV_BALANCE_URL: &str = "EXCHANGE_BALANCE_URL";
pub const ENV_SYMBOL: &str = "TRADING_SYMBOL";
pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_PORT: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Exchange account settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    /// Account balance endpoint.
    #[serde(default = "default_balance_url")]
    pub balance_url: String,
    /// Header carrying the API key.
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,
    /// Asset whose available margin is reported.
    #[serde(default = "default_asset")]
    pub asset: String,
    /// Trading pair named in the analysis announcement.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Loaded from `EXCHANGE_API_KEY` at runtime (never from the config file).
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Loaded from `EXCHANGE_API_SECRET` at runtime (never from the config file).
    #[serde(skip)]
    pub api_secret: Option<String>,
}

fn default_balance_url() -> String {
    "https://open-api.bingx.com/openApi/swap/v2/user/balance".into()
}

fn default_api_key_header() -> String {
    "X-BX-APIKEY".into()
}

fn default_asset() -> String {
    "USDT".into()
}

fn default_symbol() -> String {
    "BTC-USDT".into()
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            balance_url: default_balance_url(),
            api_key_header: default_api_key_header(),
            asset: default_asset(),
            symbol: default_symbol(),
            api_key: None,
            api_secret: None,
        }
    }
}

/// Telegram destination settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    /// Numeric chat id or `@channel` username.
    #[serde(default)]
    pub chat_id: String,
    /// Loaded from `TELEGRAM_BOT_TOKEN` at runtime (never from the config file).
    #[serde(skip)]
    pub bot_token: Option<String>,
}

/// Liveness listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

const fn default_port() -> u16 {
    10000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address the liveness listener binds to.
    #[allow(clippy::result_large_err)]
    pub fn addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| ConfigError::InvalidValue {
            field: "server.host",
            reason: format!("'{}' is not an IP address", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Startup sequence timing.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceConfig {
    /// Seconds between idle-loop cycles.
    #[serde(default = "default_idle_interval_secs")]
    pub idle_interval_secs: u64,
}

const fn default_idle_interval_secs() -> u64 {
    30
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            idle_interval_secs: default_idle_interval_secs(),
        }
    }
}

impl SequenceConfig {
    #[must_use]
    pub fn idle_interval(&self) -> Duration {
        Duration::from_secs(self.idle_interval_secs)
    }
}

/// Outbound HTTP limits shared by the exchange and Telegram clients.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, then apply environment overrides.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but falls back to defaults when the file is absent.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without applying overrides or validation.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str::<Self>(content).map_err(ConfigError::Parse)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.exchange.api_key = Some(key);
        }
        if let Some(secret) = get(ENV_API_SECRET) {
            self.exchange.api_secret = Some(secret);
        }
        if let Some(url) = get(ENV_BALANCE_URL) {
            self.exchange.balance_url = url;
        }
        if let Some(symbol) = get(ENV_SYMBOL) {
            self.exchange.symbol = symbol;
        }
        if let Some(token) = get(ENV_BOT_TOKEN) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = get(ENV_CHAT_ID) {
            self.telegram.chat_id = chat_id;
        }
        if let Some(port) = get(ENV_PORT).and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }
    }

    /// Structural validation; credentials are checked separately.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.exchange.balance_url).map_err(|e| {
            ConfigError::InvalidValue {
                field: "exchange.balance_url",
                reason: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "exchange.balance_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        if self.exchange.api_key_header.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "exchange.api_key_header",
            }
            .into());
        }
        if self.exchange.asset.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "exchange.asset",
            }
            .into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port",
                reason: "must be non-zero".into(),
            }
            .into());
        }
        self.server.addr()?;
        if self.sequence.idle_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sequence.idle_interval_secs",
                reason: "must be non-zero".into(),
            }
            .into());
        }
        if self.http.timeout_ms == 0 || self.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http",
                reason: "timeouts must be non-zero".into(),
            }
            .into());
        }
        Ok(())
    }

    /// The exchange API key, or an error naming the missing variable.
    #[allow(clippy::result_large_err)]
    pub fn require_api_key(&self) -> Result<&str> {
        self.exchange
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: ENV_API_KEY }.into())
    }

    /// The Telegram bot token and chat id, or an error naming the missing one.
    #[allow(clippy::result_large_err)]
    pub fn require_telegram(&self) -> Result<(&str, &str)> {
        let token = self
            .telegram
            .bot_token
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: ENV_BOT_TOKEN,
            })?;
        if self.telegram.chat_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: ENV_CHAT_ID }.into());
        }
        Ok((token, &self.telegram.chat_id))
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

/// Mask a secret for display, keeping a short prefix and suffix.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}
