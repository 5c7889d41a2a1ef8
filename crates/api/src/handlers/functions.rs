use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/functions/{name}
///
/// Proxies to the hosted function of the same name. The caller's `org_id`
/// and `user_id` are merged into object bodies so functions can scope their
/// work; other JSON bodies are wrapped as `{ "input": ... }`.
pub async fn invoke(
    user: AuthUser,
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let client = state
        .functions
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Remote functions are not configured".into()))?;

    let body = with_caller(body, &user);
    let data: Value = client.invoke(&name, &body).await?;
    Ok(Json(DataResponse { data }))
}

fn with_caller(body: Value, user: &AuthUser) -> Value {
    let mut object = match body {
        Value::Object(map) => map,
        other => {
            let mut map = serde_json::Map::new();
            map.insert("input".into(), other);
            map
        }
    };
    object.insert("org_id".into(), Value::String(user.org_id.to_string()));
    object.insert("user_id".into(), Value::String(user.user_id.to_string()));
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            user_id: Uuid::new_v4(),
            org_id: Uuid::new_v4(),
            role: "member".into(),
        }
    }

    #[test]
    fn caller_ids_override_client_supplied_ones() {
        let user = user();
        let body = with_caller(json!({ "lead_id": "x", "org_id": "spoofed" }), &user);
        assert_eq!(body["lead_id"], "x");
        assert_eq!(body["org_id"], user.org_id.to_string());
        assert_eq!(body["user_id"], user.user_id.to_string());
    }

    #[test]
    fn non_object_bodies_are_wrapped() {
        let body = with_caller(json!([1, 2]), &user());
        assert_eq!(body["input"], json!([1, 2]));
        assert!(body["org_id"].is_string());
    }
}
