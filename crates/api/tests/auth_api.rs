//! Session handling on read routes.

mod common;

use axum::http::StatusCode;
use callboard_api::auth::jwt::{generate_access_token, JwtConfig};
use common::{body_json, get, get_auth};
use uuid::Uuid;

const READ_ROUTES: &[&str] = &[
    "/api/v1/dashboard/stats",
    "/api/v1/dashboard/recent-calls",
    "/api/v1/dashboard/action-items",
    "/api/v1/calls",
    "/api/v1/leads",
    "/api/v1/campaigns",
    "/api/v1/agents",
    "/api/v1/team",
    "/api/v1/me",
    "/api/v1/organization",
];

#[tokio::test]
async fn read_routes_require_a_token() {
    for route in READ_ROUTES {
        let app = common::build_test_app(common::lazy_pool());
        let response = get(app, route).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{route}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "UNAUTHORIZED");
        assert_eq!(json["error"], "Missing Authorization header");
    }
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let foreign = JwtConfig {
        secret: "some-other-secret".into(),
        access_token_expiry_mins: 15,
    };
    let token = generate_access_token(Uuid::new_v4(), Uuid::new_v4(), "admin", &foreign).unwrap();

    let app = common::build_test_app(common::lazy_pool());
    let response = get_auth(app, "/api/v1/leads", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[tokio::test]
async fn non_bearer_authorization_is_rejected() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app(common::lazy_pool());
    let response = app
        .oneshot(
            Request::get("/api/v1/calls")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_id_is_a_client_error() {
    let token = common::token_for(Uuid::new_v4(), Uuid::new_v4());
    let app = common::build_test_app(common::lazy_pool());
    let response = get_auth(app, "/api/v1/campaigns/not-a-uuid", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
