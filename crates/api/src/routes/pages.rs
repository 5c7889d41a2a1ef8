//! Calls, leads, campaigns, and agents pages.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{agents, calls, campaigns, leads};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calls", get(calls::list))
        .route("/calls/{id}", get(calls::get))
        .route("/leads", get(leads::list))
        .route("/leads/{id}", get(leads::get))
        .route("/leads/{id}/timeline", get(leads::timeline))
        .route("/leads/{id}/status", patch(leads::update_status))
        .route("/campaigns", get(campaigns::list))
        .route("/campaigns/{id}", get(campaigns::get))
        .route("/campaigns/{id}/status", patch(campaigns::update_status))
        .route("/agents", get(agents::list))
}
