use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use beacon_core::event_names::EVENT_FEED_SNAPSHOT;
use beacon_events::MonitorEvent;
use futures::{SinkExt, StreamExt};

use crate::state::AppState;

/// GET /api/v1/ws
///
/// Upgrades the connection to WebSocket. The client first receives a
/// `feed.snapshot` of the session, then every bus event as a JSON text frame.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Manage a single WebSocket connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), forwards
/// manager messages to the sink on a spawned task, and drains inbound
/// frames until the client goes away. The feed is one-way, so inbound text
/// is ignored.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let ws_manager = state.ws_manager;
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    // Register before snapshotting so no event falls between the two.
    let mut rx = ws_manager.add(conn_id.clone()).await;
    match state.store.snapshot().await {
        Ok(snapshot) => {
            let event = MonitorEvent::new(EVENT_FEED_SNAPSHOT).with_data(&snapshot);
            ws_manager.send_to(&conn_id, &event).await;
        }
        Err(e) => tracing::warn!(conn_id = %conn_id, error = %e, "No snapshot for feed client"),
    }

    let (mut sink, mut stream) = socket.split();

    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "WebSocket disconnected");
}
