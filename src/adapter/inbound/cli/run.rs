//! Handler for the `run` command.

use tokio::sync::watch;
use tracing::info;

use super::RunArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::runtime::shutdown::termination_signal;
use crate::runtime::App;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.validate()?;

    config.init_logging();

    info!(
        mode = ?args.mode,
        symbol = %config.exchange.symbol,
        asset = %config.exchange.asset,
        dry_run = args.dry_run,
        "marginbell starting"
    );

    let app = App::from_config(&config, args.dry_run).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut app_handle = tokio::spawn(app.run(args.mode, shutdown_rx));

    tokio::select! {
        result = &mut app_handle => {
            result.map_err(Error::Task)??;
            info!("marginbell stopped");
            return Ok(());
        }
        () = termination_signal() => {
            let _ = shutdown_tx.send(true);
        }
    }

    app_handle.await.map_err(Error::Task)??;
    info!("marginbell stopped");
    Ok(())
}
