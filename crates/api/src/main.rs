use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon_api::config::ServerConfig;
use beacon_api::router::build_app_router;
use beacon_api::state::AppState;
use beacon_api::ws;
use beacon_events::{BusNotifier, EventBus};
use beacon_monitor::{MonitorConfig, SensorStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "beacon_api=debug,beacon_monitor=info,beacon_events=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let monitor_config = MonitorConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // --- WebSocket manager ---
    let ws_manager = Arc::new(ws::WsManager::new());
    let heartbeat_cancel = CancellationToken::new();
    let heartbeat_handle = ws::start_heartbeat(
        Arc::clone(&ws_manager),
        ws::HEARTBEAT_INTERVAL,
        heartbeat_cancel.clone(),
    );

    // Forward every bus event to WebSocket clients.
    let forwarder_cancel = CancellationToken::new();
    let forwarder_handle = tokio::spawn(
        ws::EventForwarder::new(Arc::clone(&ws_manager))
            .run(event_bus.subscribe(), forwarder_cancel.clone()),
    );

    // --- Sensor store ---
    let notifier = Arc::new(BusNotifier::new(Arc::clone(&event_bus)));
    let store = SensorStore::start(monitor_config, notifier, Arc::clone(&event_bus));

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store: store.handle(),
        ws_manager: Arc::clone(&ws_manager),
        event_bus: Arc::clone(&event_bus),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config
        .host
        .parse::<IpAddr>()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");
    let cleanup_timeout = Duration::from_secs(config.shutdown_timeout_secs);

    // Stop the simulator first so no new events are produced.
    if tokio::time::timeout(cleanup_timeout, store.shutdown())
        .await
        .is_err()
    {
        tracing::warn!("Sensor store did not shut down in time");
    }

    forwarder_cancel.cancel();
    let _ = tokio::time::timeout(cleanup_timeout, forwarder_handle).await;
    tracing::info!("Event forwarder stopped");

    let ws_count = ws_manager.connection_count().await;
    tracing::info!(ws_count, "Closing remaining WebSocket connections");
    ws_manager.shutdown_all().await;

    heartbeat_cancel.cancel();
    let _ = tokio::time::timeout(cleanup_timeout, heartbeat_handle).await;
    tracing::info!("Heartbeat task stopped");

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). If a handler cannot
/// be installed that branch never resolves, so the other one still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
