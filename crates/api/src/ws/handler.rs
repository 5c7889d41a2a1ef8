use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use callboard_core::error::CoreError;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::ws::manager::WsManager;

/// Browsers cannot set headers on a WebSocket handshake, so the session
/// token travels in the query string.
#[derive(Debug, Deserialize)]
pub struct WsParams {
    pub token: Option<String>,
}

/// GET /api/v1/ws?token=<jwt> -- upgrade to a WebSocket scoped to the
/// token's organization.
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(params): Query<WsParams>,
    ws: WebSocketUpgrade,
) -> AppResult<impl IntoResponse> {
    let token = params.token.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Missing token parameter".into()))
    })?;
    let user = AuthUser::from_token(&token, &state.config.jwt)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state.ws_manager, user)))
}

/// Drive one connection after upgrade.
///
/// Registers with [`WsManager`], forwards queued messages to the sink on a
/// spawned task, and reads inbound frames until the client goes away.
async fn handle_socket(socket: WebSocket, ws_manager: Arc<WsManager>, user: AuthUser) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, user_id = %user.user_id, org_id = %user.org_id, "WebSocket connected");

    let mut rx = ws_manager.add(conn_id.clone(), user.user_id, user.org_id).await;

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

    // Clients only listen; inbound frames other than Close are ignored.
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

    send_task.abort();
    match ws_manager.remove(&conn_id).await {
        Some(conn) => {
            let connected_secs = (chrono::Utc::now() - conn.connected_at).num_seconds();
            tracing::info!(
                conn_id = %conn_id,
                user_id = %conn.user_id,
                connected_secs,
                "WebSocket disconnected"
            );
        }
        // Already cleared by a shutdown or the heartbeat.
        None => tracing::debug!(conn_id = %conn_id, "WebSocket disconnected after removal"),
    }
}
