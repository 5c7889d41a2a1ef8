use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use callboard_core::error::CoreError;
use callboard_functions::FunctionError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the remote-function and
/// missing-dependency cases. Reads never surface database errors here: the
/// view layer absorbs them, and actions report through `ActionOutcome`.
/// Implements [`IntoResponse`] to produce `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A remote function call failed.
    #[error("Function error: {0}")]
    Function(#[from] FunctionError),

    /// A dependency this route needs is not configured.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            AppError::Function(err) => classify_function_error(err),

            AppError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                msg.clone(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Remote failures pass the function's own message through; transport
/// failures are sanitized.
fn classify_function_error(err: &FunctionError) -> (StatusCode, &'static str, String) {
    match err {
        FunctionError::InvalidName(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string()),
        FunctionError::Remote { message, .. } => {
            (StatusCode::BAD_GATEWAY, "FUNCTION_ERROR", message.clone())
        }
        FunctionError::Request(e) => {
            tracing::error!(error = %e, "Function request failed");
            (
                StatusCode::BAD_GATEWAY,
                "FUNCTION_ERROR",
                "Function request failed".to_string(),
            )
        }
    }
}
