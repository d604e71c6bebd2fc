use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::ws::manager::WsManager;

/// Interval between feed keep-alive pings.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn the keep-alive task: ping every feed client each `period` and drop
/// the ones that have gone away. Runs until `cancel` fires.
pub fn start_heartbeat(
    ws_manager: Arc<WsManager>,
    period: Duration,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Feed heartbeat stopping");
                    break;
                }
                _ = interval.tick() => {
                    let pruned = ws_manager.ping_all().await;
                    let count = ws_manager.connection_count().await;
                    if pruned > 0 {
                        tracing::info!(pruned, count, "Dropped closed feed clients");
                    } else {
                        tracing::trace!(count, "Feed heartbeat");
                    }
                }
            }
        }
    })
}
