use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use callboard_core::error::CoreError;
use callboard_core::types::DbId;
use callboard_db::views::calls;
use chrono::Utc;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/calls
pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = calls::list_calls(&state.pool, user.org_id, Utc::now()).await;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/calls/{id}
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let data = calls::get_call_by_id(&state.pool, user.org_id, id, Utc::now())
        .await
        .ok_or(CoreError::NotFound { entity: "Call", id })?;
    Ok(Json(DataResponse { data }))
}
