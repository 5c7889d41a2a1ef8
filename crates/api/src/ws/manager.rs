use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use callboard_core::types::{DbId, Timestamp};
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket connection.
pub struct WsConnection {
    pub user_id: DbId,
    /// Tenant whose events this connection receives.
    pub org_id: DbId,
    pub sender: WsSender,
    pub connected_at: Timestamp,
}

/// Registry of active WebSocket connections, keyed by connection id.
///
/// Thread-safe via an interior `RwLock`; wrap in `Arc` and share.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a connection for a signed-in user.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn add(
        &self,
        conn_id: String,
        user_id: DbId,
        org_id: DbId,
    ) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            user_id,
            org_id,
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    /// Unregister a connection, handing back what was stored for it.
    pub async fn remove(&self, conn_id: &str) -> Option<WsConnection> {
        self.connections.write().await.remove(conn_id)
    }

    /// Send a message to every connection of one organization.
    ///
    /// Returns the number of connections the message was queued for.
    /// Closed channels are skipped; their receive loops remove them.
    pub async fn send_to_org(&self, org_id: DbId, message: Message) -> usize {
        let conns = self.connections.read().await;
        let mut count = 0;
        for conn in conns.values().filter(|c| c.org_id == org_id) {
            if conn.sender.send(message.clone()).is_ok() {
                count += 1;
            }
        }
        count
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the registry.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connected client.
    pub async fn ping_all(&self) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }

    /// Drop connections whose forwarding task has gone away.
    ///
    /// Returns how many were removed.
    pub async fn remove_closed(&self) -> usize {
        let mut conns = self.connections.write().await;
        let before = conns.len();
        conns.retain(|_, conn| !conn.sender.is_closed());
        before - conns.len()
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
