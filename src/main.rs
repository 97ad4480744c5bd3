// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tokio::signal;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use crate::application::scheduler::Scheduler;
use crate::application::snapshot_store::SnapshotStore;
use crate::application::solar_service::SolarService;
use crate::application::token_manager::TokenManager;
use crate::infrastructure::config::{load_solar_config, RefreshMode};
use crate::infrastructure::vendor_client::VendorClient;
use crate::presentation::app_state::{AppState, SummarySource};
use crate::presentation::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration; missing credentials abort here, before serving
    let config = load_solar_config()?;
    let addr = config.socket_addr()?;

    // Create vendor client (infrastructure layer)
    let gateway = Arc::new(VendorClient::new(
        config.base_url.clone(),
        config.request_timeout(),
    )?);

    // Create services (application layer)
    let tokens = Arc::new(TokenManager::new(gateway.clone(), config.credentials()));
    let service = SolarService::new(gateway, tokens);

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let (source, background) = match config.mode {
        RefreshMode::OnDemand => (SummarySource::OnDemand(service), None),
        RefreshMode::Background => {
            let store = Arc::new(SnapshotStore::new());
            let scheduler = Scheduler::new(
                service,
                store.clone(),
                config.live_interval(),
                config.site_interval(),
            );
            let handle = tokio::spawn(scheduler.run(shutdown_rx));
            (SummarySource::Background(store), Some(handle))
        }
    };

    // Build router (presentation layer)
    let router = create_router(AppState { source });

    // Start server
    tracing::info!(mode = ?config.mode, site_id = %config.site_id, "Starting solar-bridge on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(());
        })
        .await?;

    if let Some(handle) = background {
        handle.await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown requested");
}
