//! Registry of live-feed subscribers.
//!
//! Each WebSocket client gets an unbounded outbound channel drained by its
//! socket task. Feed events are serialized once per publish and fanned out
//! to every client; clients whose channel has closed are dropped from the
//! registry on the next publish or ping.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use beacon_core::types::Timestamp;
use beacon_events::MonitorEvent;
use chrono::Utc;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing frames to one feed client.
pub type FeedSender = mpsc::UnboundedSender<Message>;

struct FeedClient {
    sender: FeedSender,
    connected_at: Timestamp,
    /// Feed events delivered to this client so far.
    delivered: u64,
}

/// Live-feed clients keyed by connection id.
pub struct WsManager {
    clients: RwLock<HashMap<String, FeedClient>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Register a client and return the receiver its socket task drains.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = FeedClient {
            sender: tx,
            connected_at: Utc::now(),
            delivered: 0,
        };
        self.clients.write().await.insert(conn_id, client);
        rx
    }

    pub async fn remove(&self, conn_id: &str) {
        if let Some(client) = self.clients.write().await.remove(conn_id) {
            let connected_secs = (Utc::now() - client.connected_at).num_seconds();
            tracing::debug!(
                conn_id,
                connected_secs,
                delivered = client.delivered,
                "Feed client removed"
            );
        }
    }

    /// Send one event to a single client, e.g. the snapshot that opens its
    /// feed. Returns `false` if the client is unknown or gone.
    pub async fn send_to(&self, conn_id: &str, event: &MonitorEvent) -> bool {
        let Some(frame) = encode(event) else {
            return false;
        };
        let mut clients = self.clients.write().await;
        match clients.get_mut(conn_id) {
            Some(client) if client.sender.send(frame).is_ok() => {
                client.delivered += 1;
                true
            }
            _ => false,
        }
    }

    /// Push an event to every client as one JSON text frame.
    ///
    /// Returns the number of clients reached. Closed clients are pruned.
    pub async fn publish(&self, event: &MonitorEvent) -> usize {
        let Some(frame) = encode(event) else {
            return 0;
        };
        let mut clients = self.clients.write().await;
        let mut reached = 0;
        clients.retain(|conn_id, client| {
            if client.sender.send(frame.clone()).is_err() {
                tracing::debug!(conn_id = %conn_id, "Pruning closed feed client");
                return false;
            }
            client.delivered += 1;
            reached += 1;
            true
        });
        reached
    }

    pub async fn connection_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Events delivered to one client, if it is still registered.
    pub async fn delivered(&self, conn_id: &str) -> Option<u64> {
        self.clients.read().await.get(conn_id).map(|c| c.delivered)
    }

    /// Send a Close frame to every client, then clear the registry.
    pub async fn shutdown_all(&self) {
        let mut clients = self.clients.write().await;
        let count = clients.len();
        for client in clients.values() {
            let _ = client.sender.send(Message::Close(None));
        }
        clients.clear();
        tracing::info!(count, "Closed all feed clients");
    }

    /// Ping every client and prune the ones whose channel has closed.
    /// Returns how many were pruned.
    pub async fn ping_all(&self) -> usize {
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|_, client| client.sender.send(Message::Ping(Bytes::new())).is_ok());
        before - clients.len()
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(event: &MonitorEvent) -> Option<Message> {
    match serde_json::to_string(event) {
        Ok(text) => Some(Message::Text(text.into())),
        Err(e) => {
            tracing::error!(
                error = %e,
                event_type = %event.event_type,
                "Failed to serialize feed event"
            );
            None
        }
    }
}
