//! TripCheck HTTP Server
//!
//! Main entry point for the trip requirements web server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::TripRequirementsService;
use infrastructure::{AppConfig, PageRenderer, TravelSafeAdapter, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration decides the log format, so load it first
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map(|config| config.server.log_format)
        .unwrap_or_default();
    init_tracing(log_format)?;

    info!("TripCheck v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.context("Failed to load configuration")?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        provider = %config.travelsafe.base_url,
        api_key_configured = config.travelsafe.has_api_key(),
        "Configuration loaded"
    );

    // Initialize provider adapter
    let adapter = TravelSafeAdapter::new(&config.travelsafe)
        .map_err(|e| anyhow::anyhow!("Failed to initialize travelsafe client: {e}"))?;

    // Initialize services
    let service =
        TripRequirementsService::with_timeout(Arc::new(adapter), config.server.request_timeout());
    let renderer = PageRenderer::with_config(config.templates.clone())?;

    let state = AppState::new(service, renderer);

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown = Arc::new(Notify::new());
    let server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown({
                let shutdown = Arc::clone(&shutdown);
                async move { shutdown.notified().await }
            })
            .into_future(),
    );

    shutdown_signal().await;
    shutdown.notify_one();

    let shutdown_timeout = config.server.shutdown_timeout();
    info!("Waiting up to {:?} for connections to close...", shutdown_timeout);
    drain(server, shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for the server task to finish, giving up after `timeout`
async fn drain(
    server: tokio::task::JoinHandle<std::io::Result<()>>,
    timeout: Duration,
) -> anyhow::Result<()> {
    match tokio::time::timeout(timeout, server).await {
        Ok(joined) => {
            joined??;
            Ok(())
        },
        Err(_) => {
            warn!("Connections still open after {:?}, exiting", timeout);
            Ok(())
        },
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
