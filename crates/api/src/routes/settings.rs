use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// ```text
/// GET  /team           -> list_team
/// GET  /me             -> me
/// GET  /organization   -> get_organization
/// PUT  /organization   -> update_organization
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/team", get(settings::list_team))
        .route("/me", get(settings::me))
        .route(
            "/organization",
            get(settings::get_organization).put(settings::update_organization),
        )
}
