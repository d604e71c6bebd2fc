use std::sync::Arc;

use beacon_events::EventBus;
use beacon_monitor::StoreHandle;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc` or is a weak handle.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read/command handle onto the sensor store.
    pub store: StoreHandle,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Event bus the store publishes on.
    pub event_bus: Arc<EventBus>,
}
