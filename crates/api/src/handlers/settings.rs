//! Handlers for the settings pages: team, organization profile, and the
//! signed-in member.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use callboard_core::error::CoreError;
use callboard_db::models::organization::UpdateOrganization;
use callboard_db::views::{organization, team};

use crate::actions::{self, ActionError};
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/team
pub async fn list_team(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let data = team::list_team_members(&state.pool, user.org_id).await;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/me
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = team::get_member(&state.pool, user.user_id)
        .await
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/organization
pub async fn get_organization(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let data = organization::get_organization(&state.pool, user.org_id)
        .await
        .ok_or(CoreError::NotFound {
            entity: "Organization",
            id: user.org_id,
        })?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/organization
pub async fn update_organization(
    session: Option<AuthUser>,
    State(state): State<AppState>,
    input: Result<Json<UpdateOrganization>, JsonRejection>,
) -> Response {
    let request = input.map(|Json(input)| input).map_err(ActionError::from);

    let result = match actions::session_then(session.as_ref(), request) {
        Ok(input) => {
            actions::update_organization(state.action_context(), session.as_ref(), &input).await
        }
        Err(e) => Err(e),
    };
    actions::respond(result)
}
