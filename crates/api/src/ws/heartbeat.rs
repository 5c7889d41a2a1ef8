use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

/// Seconds between keep-alive rounds.
const PING_EVERY_SECS: u64 = 30;

/// Keep dashboard sockets alive through idle proxies.
///
/// Each round first drops registrations whose socket task has exited, so
/// invalidation fan-out never targets a dead tab, then pings the rest.
/// Abort the returned handle to stop it.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(PING_EVERY_SECS));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let pruned = ws_manager.remove_closed().await;
            if pruned > 0 {
                tracing::debug!(pruned, "Removed closed WebSocket registrations");
            }

            let live = ws_manager.connection_count().await;
            if live == 0 {
                continue;
            }
            tracing::trace!(live, "Pinging dashboard sockets");
            ws_manager.ping_all().await;
        }
    })
}
