use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use callboard_db::views::agents;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/agents
pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let data = agents::list_agents(&state.pool, user.org_id).await;
    Ok(Json(DataResponse { data }))
}
