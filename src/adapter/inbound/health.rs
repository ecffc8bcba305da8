//! Liveness responder.
//!
//! A single route, `GET /`, answering `200 OK` with a fixed status text so a
//! hosting platform considers the process alive. It holds no state and does
//! not depend on the startup sequence.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use crate::error::{Error, Result};
use crate::runtime::shutdown::wait_for_shutdown;

/// Body returned by `GET /`.
pub const STATUS_TEXT: &str = "Bot is running!";

/// Router with the liveness route.
pub fn router() -> Router {
    Router::new().route("/", get(status))
}

async fn status() -> &'static str {
    STATUS_TEXT
}

/// A bound liveness listener, ready to serve.
pub struct HealthServer {
    listener: TcpListener,
    addr: SocketAddr,
}

impl HealthServer {
    /// Bind the listener. Failure is fatal for the process.
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let addr = listener.local_addr()?;
        info!(%addr, "Liveness listener bound");
        Ok(Self { listener, addr })
    }

    /// The address actually bound (resolves port 0).
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until the shutdown flag is raised.
    pub async fn serve(self, shutdown: watch::Receiver<bool>) -> Result<()> {
        info!(addr = %self.addr, "Liveness responder serving");

        axum::serve(self.listener, router())
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await
            .map_err(Error::Server)?;

        info!("Liveness responder stopped");
        Ok(())
    }
}
