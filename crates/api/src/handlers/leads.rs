use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use callboard_core::error::CoreError;
use callboard_core::status::LeadStatus;
use callboard_core::types::DbId;
use callboard_db::views::leads;
use chrono::Utc;
use serde::Deserialize;

use crate::actions::{self, ActionError};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/leads
pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = leads::list_leads(&state.pool, user.org_id, Utc::now()).await;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/leads/{id}
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let data = leads::get_lead_by_id(&state.pool, user.org_id, id, Utc::now())
        .await
        .ok_or(CoreError::NotFound { entity: "Lead", id })?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/leads/{id}/timeline
///
/// An unknown lead yields an empty timeline.
pub async fn timeline(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let data = leads::get_lead_timeline(&state.pool, user.org_id, id, Utc::now()).await;
    Ok(Json(DataResponse { data }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateLeadStatusRequest {
    pub status: LeadStatus,
}

/// PATCH /api/v1/leads/{id}/status
pub async fn update_status(
    session: Option<AuthUser>,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateLeadStatusRequest>, JsonRejection>,
) -> Response {
    let request = id
        .map_err(ActionError::from)
        .and_then(|Path(id)| Ok((id, input?.0.status)));

    let result = match actions::session_then(session.as_ref(), request) {
        Ok((id, status)) => {
            actions::update_lead_status(state.action_context(), session.as_ref(), id, status).await
        }
        Err(e) => Err(e),
    };
    actions::respond(result)
}
