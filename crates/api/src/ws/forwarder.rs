//! Bus-to-WebSocket fan-out.
//!
//! [`EventForwarder`] subscribes to the event bus and pushes every
//! [`MonitorEvent`] to every registered feed client.

use std::sync::Arc;

use beacon_events::MonitorEvent;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::ws::WsManager;

pub struct EventForwarder {
    ws_manager: Arc<WsManager>,
}

impl EventForwarder {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the forwarding loop until `cancel` fires or the bus closes.
    pub async fn run(self, mut receiver: broadcast::Receiver<MonitorEvent>, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Event forwarder stopping");
                    break;
                }
                received = receiver.recv() => match received {
                    Ok(event) => self.forward(&event).await,
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Event forwarder lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("Event bus closed, event forwarder shutting down");
                        break;
                    }
                },
            }
        }
    }

    async fn forward(&self, event: &MonitorEvent) {
        let reached = self.ws_manager.publish(event).await;
        tracing::trace!(event_type = %event.event_type, reached, "Forwarded feed event");
    }
}
