//! JWT-based session extractor for Axum handlers.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use callboard_core::error::CoreError;
use callboard_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated session extracted from `Authorization: Bearer <token>`.
///
/// As a plain extractor it rejects requests without a valid token with 401.
/// As `Option<AuthUser>` it yields `None` instead, which lets actions report
/// "Not authenticated" in their own result shape.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    /// Every query made on behalf of this session is scoped to this tenant.
    pub org_id: DbId,
    pub role: String,
}

impl AuthUser {
    /// Validate a raw token and build the session from its claims.
    pub fn from_token(token: &str, config: &JwtConfig) -> Result<Self, AppError> {
        let claims = validate_token(token, config).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;
        Ok(AuthUser {
            user_id: claims.sub,
            org_id: claims.org_id,
            role: claims.role,
        })
    }
}

fn session_from_parts(parts: &Parts, state: &AppState) -> Result<AuthUser, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    AuthUser::from_token(token, &state.config.jwt)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_from_parts(parts, state)
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match session_from_parts(parts, state) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::debug!(error = %e, "No valid session on request");
                Ok(None)
            }
        }
    }
}
