use std::sync::Arc;

use axum::extract::ws::Message;
use callboard_events::PlatformEvent;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// The frame sent to clients: `{"type":"invalidate","paths":[...],"event_type":...}`.
#[derive(Debug, Serialize)]
struct InvalidateFrame<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    paths: &'a [String],
    event_type: &'a str,
}

/// JSON text of the invalidation frame for `event`.
pub fn invalidation_message(event: &PlatformEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&InvalidateFrame {
        kind: "invalidate",
        paths: &event.invalidates,
        event_type: &event.event_type,
    })
}

/// Routes bus events to WebSocket clients of the same organization.
pub struct InvalidationRouter {
    ws_manager: Arc<WsManager>,
}

impl InvalidationRouter {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the routing loop until the bus is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<PlatformEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    self.route_event(&event).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Invalidation router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, invalidation router shutting down");
                    break;
                }
            }
        }
    }

    /// Forward one event. Events without paths are ignored.
    pub async fn route_event(&self, event: &PlatformEvent) -> usize {
        if event.invalidates.is_empty() {
            return 0;
        }

        let text = match invalidation_message(event) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, event_type = %event.event_type, "Failed to encode invalidation");
                return 0;
            }
        };

        let delivered = self
            .ws_manager
            .send_to_org(event.org_id, Message::Text(text.into()))
            .await;
        tracing::debug!(
            event_type = %event.event_type,
            org_id = %event.org_id,
            paths = ?event.invalidates,
            delivered,
            "Invalidation sent"
        );
        delivered
    }
}
