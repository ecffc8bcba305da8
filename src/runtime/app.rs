//! Wiring and supervision of the two run-time components.
//!
//! In [`RunMode::Worker`] the liveness responder runs as a background task and
//! the startup sequence runs on the calling task. [`RunMode::Web`] swaps them.
//! Both components watch the same shutdown flag; neither talks to the other.

use std::sync::Arc;

use clap::ValueEnum;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::sequence::{SequenceReport, StartupSequence};
use crate::adapter::inbound::health::HealthServer;
use crate::adapter::outbound::exchange::ExchangeClient;
use crate::adapter::outbound::notifier::LogNotifier;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::port::Notifier;

/// Which component owns the calling task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Sequence on the main task, liveness responder in the background.
    #[default]
    Worker,
    /// Liveness responder on the main task, sequence in the background.
    Web,
}

/// The assembled application: a bound listener plus the startup sequence.
pub struct App {
    server: HealthServer,
    sequence: StartupSequence,
}

impl App {
    pub fn new(server: HealthServer, sequence: StartupSequence) -> Self {
        Self { server, sequence }
    }

    /// Build every component from configuration and bind the listener.
    ///
    /// With `dry_run` the messages are logged rather than sent, and Telegram
    /// credentials are not required.
    pub async fn from_config(config: &Config, dry_run: bool) -> Result<Self> {
        let balance = Arc::new(ExchangeClient::from_config(config)?);
        let notifier = build_notifier(config, dry_run)?;
        let sequence = StartupSequence::from_config(config, balance, notifier);
        let server = HealthServer::bind(config.server.addr()?).await?;
        Ok(Self::new(server, sequence))
    }

    /// Address of the liveness listener.
    #[must_use]
    pub fn local_addr(&self) -> std::net::SocketAddr {
        self.server.local_addr()
    }

    /// Run until the shutdown flag is raised.
    pub async fn run(self, mode: RunMode, shutdown: watch::Receiver<bool>) -> Result<()> {
        info!(?mode, addr = %self.server.local_addr(), "Starting");

        match mode {
            RunMode::Worker => Self::run_worker(self.server, self.sequence, shutdown).await,
            RunMode::Web => Self::run_web(self.server, self.sequence, shutdown).await,
        }
    }

    async fn run_worker(
        server: HealthServer,
        sequence: StartupSequence,
        shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut server_task: JoinHandle<Result<()>> =
            tokio::spawn(server.serve(shutdown.clone()));

        tokio::select! {
            report = sequence.run(shutdown) => log_report(&report),
            result = &mut server_task => {
                // Responder stopped before the sequence.
                return flatten(result);
            }
        }

        flatten(server_task.await)
    }

    async fn run_web(
        server: HealthServer,
        sequence: StartupSequence,
        shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let sequence_shutdown = shutdown.clone();
        let sequence_task = tokio::spawn(async move { sequence.run(sequence_shutdown).await });

        let served = server.serve(shutdown).await;
        if served.is_err() {
            sequence_task.abort();
        }
        served?;

        let report = sequence_task.await?;
        log_report(&report);
        Ok(())
    }
}

fn build_notifier(config: &Config, dry_run: bool) -> Result<Arc<dyn Notifier>> {
    if dry_run {
        info!("Dry-run mode: notifications will be logged, not sent");
        return Ok(Arc::new(LogNotifier));
    }

    #[cfg(feature = "telegram")]
    {
        use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
        Ok(Arc::new(TelegramNotifier::from_config(config)?))
    }

    #[cfg(not(feature = "telegram"))]
    {
        let _ = config;
        warn!("Built without the telegram feature; notifications will be logged");
        Ok(Arc::new(LogNotifier))
    }
}

fn flatten(result: std::result::Result<Result<()>, tokio::task::JoinError>) -> Result<()> {
    result.map_err(Error::Task)?
}

fn log_report(report: &SequenceReport) {
    if report.delivered < report.attempted {
        warn!(
            attempted = report.attempted,
            delivered = report.delivered,
            "Some startup notifications were not delivered"
        );
    }
}
