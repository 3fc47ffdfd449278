use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt; // for `oneshot`

use minerals_portal::test_helpers::{ALICE_PASSWORD, BOB_PASSWORD, seed_data_dir, test_router};

fn app() -> Router {
    test_router(&seed_data_dir())
}

async fn post_login(app: &Router, username: &str, password: &str) -> (StatusCode, serde_json::Value) {
    let payload = json!({ "username": username, "password": password });
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = res.status();
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = post_login(app, username, password).await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().expect("token").to_string()
}

async fn get_with_token(app: &Router, uri: &str, token: &str) -> (StatusCode, serde_json::Value) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = res.status();
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_public() {
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_returns_token_and_role() {
    let app = app();
    let (status, body) = post_login(&app, "alice", ALICE_PASSWORD).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role_name"], "Administrator");
}

#[tokio::test]
async fn bad_password_and_unknown_user_get_identical_denials() {
    let app = app();

    let wrong_password = post_login(&app, "alice", "not-the-password").await;
    let unknown_user = post_login(&app, "mallory", "whatever").await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    // same status, same body: nothing reveals which input was wrong
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password.1["error"], "Invalid username or password");
}

#[tokio::test]
async fn gated_route_without_token_is_rejected() {
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/countries")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_echoes_session_claims() {
    let app = app();
    let token = login_token(&app, "bob", BOB_PASSWORD).await;

    let (status, body) = get_with_token(&app, "/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "bob");
    assert_eq!(body["role_id"], 2);
    assert_eq!(body["user_id"], 2);
}

#[tokio::test]
async fn admin_listing_requires_manage_users() {
    let app = app();
    let token = login_token(&app, "bob", BOB_PASSWORD).await;

    let (status, body) = get_with_token(&app, "/admin/users", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Missing required permission");
}

#[tokio::test]
async fn admin_listing_joins_roles_and_hides_hashes() {
    let app = app();
    let token = login_token(&app, "alice", ALICE_PASSWORD).await;

    let (status, body) = get_with_token(&app, "/admin/users", &token).await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().expect("array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[0]["role_name"], "Administrator");
    assert_eq!(users[1]["role_name"], "Investor");
    for user in users {
        assert!(user.get("password_hash").is_none());
        assert!(user.get("PasswordHash").is_none());
    }
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = app();
    let (status, _) = get_with_token(&app, "/countries", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
