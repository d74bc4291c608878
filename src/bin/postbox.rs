//! Postbox HTTP server.
//!
//! Serves the messaging API over in-memory storage. All state is lost when
//! the process exits.
//!
//! Configuration is read from the environment (and a `.env` file, if
//! present): `POSTBOX_HOST`, `POSTBOX_PORT`, and `RUST_LOG`.

use anyhow::{Context, anyhow};
use postbox::config::ServerConfig;
use postbox::http::{AppState, router};
use postbox::telemetry;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init_tracing().map_err(|err| anyhow!(err))?;
    if let Err(err) = dotenv {
        debug!(error = %err, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let address = config.socket_addr();
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "postbox listening");

    axum::serve(listener, router(AppState::in_memory()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;
    info!("postbox stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
