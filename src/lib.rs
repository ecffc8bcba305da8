//! marginbell - exchange margin check with Telegram notifications.
//!
//! On start the service greets a Telegram chat, reports the account's
//! available margin for one asset, announces that analysis is starting and
//! then idles. A minimal HTTP liveness endpoint runs alongside so a hosting
//! platform considers the process alive.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML with environment overrides
//! - [`domain`] - Chat ids, notification messages, startup stages
//! - [`port`] - Traits for the balance source and the notifier
//! - [`adapter`] - Exchange client, Telegram notifier, liveness responder, CLI
//! - [`runtime`] - Startup sequence, supervision and shutdown
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` - Deliver notifications through the Telegram Bot API (default)
//!
//! # Example
//!
//! ```no_run
//! use marginbell::config::Config;
//! use marginbell::runtime::{App, RunMode};
//! use tokio::sync::watch;
//!
//! # async fn example() -> marginbell::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let app = App::from_config(&config, true).await?;
//! let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//! app.run(RunMode::Worker, shutdown_rx).await
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod runtime;
