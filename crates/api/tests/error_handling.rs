//! `AppError` to HTTP response mapping, checked without a server.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use callboard_api::error::AppError;
use callboard_core::error::CoreError;
use callboard_functions::FunctionError;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let id = Uuid::new_v4();
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Campaign",
        id,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Campaign with id {id} not found"));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("website: url".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "website: url");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn invalid_function_name_returns_400() {
    let (status, json) =
        error_to_response(AppError::Function(FunctionError::InvalidName("../etc".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn remote_function_failure_returns_502_with_message() {
    let (status, json) = error_to_response(AppError::Function(FunctionError::Remote {
        status: 422,
        message: "lead has no phone number".into(),
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "FUNCTION_ERROR");
    assert_eq!(json["error"], "lead has no phone number");
}

#[tokio::test]
async fn unconfigured_dependency_returns_503() {
    let (status, json) =
        error_to_response(AppError::Unavailable("Remote functions are not configured".into()))
            .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
}
