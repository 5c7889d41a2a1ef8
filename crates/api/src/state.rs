use std::sync::Arc;

use callboard_events::EventBus;
use callboard_functions::FunctionsClient;

use crate::actions::ActionContext;
use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub pool: callboard_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Browser WebSocket connections.
    pub ws_manager: Arc<WsManager>,
    /// Mutations publish invalidation events here.
    pub event_bus: Arc<EventBus>,
    /// `None` when `FUNCTIONS_URL` is not configured.
    pub functions: Option<FunctionsClient>,
}

impl AppState {
    /// The slice of state an action needs.
    pub fn action_context(&self) -> ActionContext<'_> {
        ActionContext {
            pool: &self.pool,
            event_bus: &self.event_bus,
        }
    }
}
