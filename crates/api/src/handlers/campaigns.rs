use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use callboard_core::error::CoreError;
use callboard_core::status::CampaignStatus;
use callboard_core::types::DbId;
use callboard_db::views::campaigns;
use serde::Deserialize;

use crate::actions::{self, ActionError};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/campaigns
pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = campaigns::list_campaigns(&state.pool, user.org_id).await;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/campaigns/{id}
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let data = campaigns::get_campaign_by_id(&state.pool, user.org_id, id)
        .await
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    Ok(Json(DataResponse { data }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignStatusRequest {
    pub status: CampaignStatus,
}

/// PATCH /api/v1/campaigns/{id}/status
pub async fn update_status(
    session: Option<AuthUser>,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateCampaignStatusRequest>, JsonRejection>,
) -> Response {
    let request = id
        .map_err(ActionError::from)
        .and_then(|Path(id)| Ok((id, input?.0.status)));

    let result = match actions::session_then(session.as_ref(), request) {
        Ok((id, status)) => {
            actions::update_campaign_status(state.action_context(), session.as_ref(), id, status)
                .await
        }
        Err(e) => Err(e),
    };
    actions::respond(result)
}
