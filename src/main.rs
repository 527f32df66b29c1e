//! `thermonitor-server`: serves the prerendered landing page and static assets.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use thermonitor_web::config::{ServerConfig, DEFAULT_LOG_FILTER};
use thermonitor_web::ui::{router, AppState};
use thermonitor_web::Error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = ServerConfig::from_env()?;
    tracing::info!(bind = %config.bind, assets = %config.assets_dir.display(), "starting");

    let app = router(AppState::prerender(), &config.assets_dir);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| Error::Bind {
            addr: config.bind,
            source,
        })?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
