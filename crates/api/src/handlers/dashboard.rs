//! Handlers for the dashboard home page.
//!
//! Reads require authentication via [`AuthUser`]. Resolving an action item
//! is an action and answers with an [`ActionOutcome`](crate::actions::ActionOutcome).

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use callboard_core::status::ResolutionType;
use callboard_core::types::DbId;
use callboard_db::views::dashboard;
use chrono::Utc;
use serde::Deserialize;

use crate::actions::{self, ActionError};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = dashboard::get_dashboard_stats(&state.pool, user.org_id, Utc::now()).await;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/dashboard/recent-calls
pub async fn recent_calls(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let data = dashboard::list_recent_calls(&state.pool, user.org_id, Utc::now()).await;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/dashboard/action-items
pub async fn action_items(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let data = dashboard::list_open_action_items(&state.pool, user.org_id, Utc::now()).await;
    Ok(Json(DataResponse { data }))
}

#[derive(Debug, Deserialize)]
pub struct ResolveActionItemRequest {
    pub resolution_type: ResolutionType,
}

/// POST /api/v1/action-items/{id}/resolve
pub async fn resolve_action_item(
    session: Option<AuthUser>,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<ResolveActionItemRequest>, JsonRejection>,
) -> Response {
    let request = id
        .map_err(ActionError::from)
        .and_then(|Path(id)| Ok((id, input?.0.resolution_type)));

    let result = match actions::session_then(session.as_ref(), request) {
        Ok((id, resolution)) => {
            actions::resolve_action_item(state.action_context(), session.as_ref(), id, resolution)
                .await
        }
        Err(e) => Err(e),
    };
    actions::respond(result)
}
