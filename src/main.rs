use std::time::Duration;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{error, info, warn};

use account_master::account_master_config::ServerConfig;
use account_master::account_master_observability::init_tracing;
use account_master::router::init_router;
use account_master::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    if let Err(err) = run().await {
        error!(error = ?err, "Server failed");
        return Err(err);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();
    let state = init_app_state()
        .await
        .context("Failed to initialise application state")?;
    let app = init_router(state, &config);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(%address, "Server running");
    info!("Swagger UI available at http://{address}/swagger-ui");
    info!("Scalar UI available at http://{address}/scalar");

    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            drain_tx.send(()).ok();
        })
        .into_future();

    tokio::select! {
        result = server => result.context("Server error")?,
        _ = drain_deadline(drain_rx, config.shutdown_timeout) => {
            warn!("Shutdown timeout elapsed, dropping in-flight requests");
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Resolves once the grace period after a shutdown signal runs out.
async fn drain_deadline(signalled: tokio::sync::oneshot::Receiver<()>, grace: Duration) {
    if signalled.await.is_err() {
        std::future::pending::<()>().await;
    }
    tokio::time::sleep(grace).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
