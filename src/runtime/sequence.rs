//! The startup sequence: welcome, balance result, analysis announcement, idle.
//!
//! Each stage advances unconditionally; a failed send or balance query only
//! changes which message goes out. Exactly three notifications are attempted
//! before the idle loop, which then does nothing but wait for shutdown.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::balance::check_balance;
use super::shutdown::wait_for_shutdown;
use crate::config::Config;
use crate::domain::{
    analysis_started_text, balance_text, welcome_text, ChatId, NotificationMessage, Stage,
};
use crate::port::{BalanceSource, Notifier};

/// Outcome of the announcement stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceReport {
    /// Margin reported in the balance message, if any.
    pub available_margin: Option<f64>,
    /// Notifications attempted.
    pub attempted: usize,
    /// Notifications the notifier accepted.
    pub delivered: usize,
}

pub struct StartupSequence {
    balance: Arc<dyn BalanceSource>,
    notifier: Arc<dyn Notifier>,
    chat_id: ChatId,
    symbol: String,
    idle_interval: Duration,
}

impl StartupSequence {
    pub fn new(
        balance: Arc<dyn BalanceSource>,
        notifier: Arc<dyn Notifier>,
        chat_id: ChatId,
        symbol: impl Into<String>,
        idle_interval: Duration,
    ) -> Self {
        Self {
            balance,
            notifier,
            chat_id,
            symbol: symbol.into(),
            idle_interval,
        }
    }

    pub fn from_config(
        config: &Config,
        balance: Arc<dyn BalanceSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(
            balance,
            notifier,
            ChatId::new(config.telegram.chat_id.as_str()),
            config.exchange.symbol.as_str(),
            config.sequence.idle_interval(),
        )
    }

    /// Run all stages, then idle until shutdown.
    ///
    /// A shutdown raised during the announcements stops the sequence early;
    /// the report then covers the notifications attempted so far.
    pub async fn run(&self, shutdown: watch::Receiver<bool>) -> SequenceReport {
        let mut report = SequenceReport::default();
        let completed = tokio::select! {
            () = self.announce_into(&mut report) => true,
            () = wait_for_shutdown(shutdown.clone()) => false,
        };

        if !completed {
            info!(
                attempted = report.attempted,
                delivered = report.delivered,
                "Shutdown during startup announcements"
            );
            return report;
        }

        self.idle(shutdown).await;
        report
    }

    /// Walk the announcement stages up to [`Stage::Idle`].
    pub async fn announce(&self) -> SequenceReport {
        let mut report = SequenceReport::default();
        self.announce_into(&mut report).await;
        report
    }

    async fn announce_into(&self, report: &mut SequenceReport) {
        let mut stage = Stage::Started;

        loop {
            debug!(%stage, "Startup stage");
            match stage {
                Stage::Started => {
                    let text = welcome_text(&self.symbol, Utc::now());
                    self.notify(stage, text, report).await;
                }
                Stage::BalanceChecked => {
                    let margin = check_balance(self.balance.as_ref()).await;
                    report.available_margin = margin;
                    let text = balance_text(self.balance.asset(), margin);
                    self.notify(stage, text, report).await;
                }
                Stage::AnalysisAnnounced => {
                    let text = analysis_started_text(&self.symbol);
                    self.notify(stage, text, report).await;
                }
                Stage::Idle => break,
            }
            stage = stage.next();
        }

        info!(
            attempted = report.attempted,
            delivered = report.delivered,
            "Startup announcements complete"
        );
    }

    /// Wait in fixed intervals, doing nothing, until shutdown. Returns the
    /// number of completed cycles.
    pub async fn idle(&self, mut shutdown: watch::Receiver<bool>) -> u64 {
        if *shutdown.borrow() {
            return 0;
        }

        info!(
            interval_secs = self.idle_interval.as_secs_f64(),
            "Entering idle loop"
        );

        let mut ticker = tokio::time::interval_at(
            tokio::time::Instant::now() + self.idle_interval,
            self.idle_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut cycles = 0u64;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!(cycles, "Idle loop stopped");
                                break;
                            }
                        }
                        Err(_) => {
                            info!(cycles, "Shutdown channel closed");
                            break;
                        }
                    }
                }
                _ = ticker.tick() => {
                    cycles += 1;
                    debug!(cycles, "Idle cycle");
                }
            }
        }

        cycles
    }

    async fn notify(&self, stage: Stage, text: String, report: &mut SequenceReport) {
        let message = NotificationMessage::new(self.chat_id.clone(), text);
        report.attempted += 1;

        match self.notifier.send(&message).await {
            Ok(()) => {
                report.delivered += 1;
                info!(%stage, chat_id = %self.chat_id, "Notification sent");
            }
            Err(e) => {
                warn!(%stage, chat_id = %self.chat_id, error = %e, "Failed to send notification");
            }
        }
    }
}
