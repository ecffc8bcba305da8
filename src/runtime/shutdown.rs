//! Shutdown signalling shared by the sequence and the liveness responder.

use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

/// Resolve once the flag is `true` or the sender is gone.
pub async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}

/// Resolve on Ctrl+C, or SIGTERM on Unix.
pub async fn termination_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Shutdown signal received (Ctrl+C)"),
        () = terminate => info!("Shutdown signal received (SIGTERM)"),
    }
}
