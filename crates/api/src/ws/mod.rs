//! WebSocket infrastructure for the live event feed.
//!
//! Provides connection management, heartbeat monitoring, the bus-to-client
//! forwarder and the HTTP upgrade handler used by Axum routes.

mod forwarder;
mod handler;
mod heartbeat;
pub mod manager;

pub use forwarder::EventForwarder;
pub use handler::ws_handler;
pub use heartbeat::{start_heartbeat, HEARTBEAT_INTERVAL};
pub use manager::WsManager;
