use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard home routes mounted at `/dashboard`.
///
/// ```text
/// GET  /stats          -> stats
/// GET  /recent-calls   -> recent_calls
/// GET  /action-items   -> action_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/recent-calls", get(dashboard::recent_calls))
        .route("/action-items", get(dashboard::action_items))
}
