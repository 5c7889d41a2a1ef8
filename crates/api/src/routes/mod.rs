pub mod dashboard;
pub mod health;
pub mod pages;
pub mod settings;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws?token=                                WebSocket (invalidations)
///
/// /dashboard/stats                          headline counts
/// /dashboard/recent-calls                   five latest calls
/// /dashboard/action-items                   open follow-ups
/// /action-items/{id}/resolve                resolve (POST, action)
///
/// /calls                                    list
/// /calls/{id}                               get
/// /leads                                    list
/// /leads/{id}                               get
/// /leads/{id}/timeline                      activity feed
/// /leads/{id}/status                        update (PATCH, action)
/// /campaigns                                list
/// /campaigns/{id}                           get
/// /campaigns/{id}/status                    update (PATCH, action)
/// /agents                                   list
///
/// /team                                     list members
/// /me                                       signed-in member
/// /organization                             get, update (PUT, action)
///
/// /functions/{name}                         invoke remote function (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/dashboard", dashboard::router())
        .route(
            "/action-items/{id}/resolve",
            post(handlers::dashboard::resolve_action_item),
        )
        .merge(pages::router())
        .merge(settings::router())
        .route("/functions/{name}", post(handlers::functions::invoke))
}
