use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the sensor store is still running.
    pub store_open: bool,
    /// Number of live WebSocket clients.
    pub ws_connections: usize,
    /// Number of event bus subscribers (the WebSocket forwarder, mostly).
    pub event_subscribers: usize,
}

/// GET /health -- returns service and sensor store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_open = state.store.is_open();
    let status = if store_open { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_open,
        ws_connections: state.ws_manager.connection_count().await,
        event_subscribers: state.event_bus.subscriber_count(),
    })
}

/// Mount health check routes (root level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
