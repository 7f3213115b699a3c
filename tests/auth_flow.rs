use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt; // for `oneshot`

use food_admin::{
    auth::{
        Claims, SessionStatus,
        bootstrap::build_session,
        jwt::{JwtKeys, encode_token, now_unix},
        storage::{FileStorage, KeyValueStorage},
    },
    routes::API_PREFIX,
    test_helpers::{TEST_EMAIL, TEST_PASSWORD, TEST_SECRET, test_config, test_router, test_state},
};

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

async fn json_response(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(api_path(path))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(api_path(path))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn login(app: &axum::Router) -> String {
    let (status, body) = json_response(
        app,
        post_json("/login", json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let app = test_router(test_state());

    let (status, body) = json_response(
        &app,
        post_json("/login", json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["user"]["email"], TEST_EMAIL);
    assert_eq!(body["data"]["user"]["name"], "Admin User");
    assert!(body["data"]["access_token"].as_str().unwrap().len() > 20);
}

#[tokio::test]
async fn login_rejects_anything_but_the_exact_pair() {
    let app = test_router(test_state());

    for (email, password) in [
        (TEST_EMAIL, "Password"),
        ("ADMIN@example.com", TEST_PASSWORD),
        ("someone@example.com", TEST_PASSWORD),
        ("", ""),
    ] {
        let (status, body) = json_response(
            &app,
            post_json("/login", json!({ "email": email, "password": password })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED, "{email}/{password}");
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body["data"].is_null());
    }
}

#[tokio::test]
async fn me_requires_a_bearer_token() {
    let app = test_router(test_state());

    let (status, body) = json_response(
        &app,
        Request::builder()
            .uri(api_path("/me"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing/invalid Authorization header");
}

#[tokio::test]
async fn me_returns_the_session_user() {
    let app = test_router(test_state());
    let token = login(&app).await;

    let (status, body) = json_response(&app, get_with_token("/me", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["email"], TEST_EMAIL);
}

#[tokio::test]
async fn logout_invalidates_outstanding_tokens() {
    let state = test_state();
    let app = test_router(state.clone());
    let token = login(&app).await;

    let (status, _) = json_response(
        &app,
        Request::builder()
            .method("POST")
            .uri(api_path("/logout"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.session.status(), SessionStatus::Unauthenticated);

    let (status, body) = json_response(&app, get_with_token("/me", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Session has ended");
}

#[tokio::test]
async fn expired_tokens_are_rejected() {
    let app = test_router(test_state());
    login(&app).await;

    let keys = JwtKeys::from_secret(TEST_SECRET.as_bytes());
    let claims = Claims {
        sub: "1".to_string(),
        name: "Admin User".to_string(),
        iat: now_unix() - 7200,
        exp: now_unix() - 3600,
    };
    let token = encode_token(&keys, &claims).unwrap();

    let (status, _) = json_response(&app, get_with_token("/me", &token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn forgot_password_knows_only_the_operator_email() {
    let app = test_router(test_state());

    let (ok_status, ok_body) =
        json_response(&app, post_json("/forgot-password", json!({ "email": TEST_EMAIL }))).await;
    let (missing_status, missing_body) = json_response(
        &app,
        post_json("/forgot-password", json!({ "email": "nobody@example.com" })),
    )
    .await;

    assert_eq!(ok_status, StatusCode::OK);
    assert_eq!(ok_body["message"], "Password reset instructions sent to your email");
    assert_eq!(missing_status, StatusCode::NOT_FOUND);
    assert_eq!(missing_body["message"], "Email not found");
}

#[tokio::test]
async fn malformed_login_body_gets_the_json_envelope() {
    let app = test_router(test_state());

    let (status, body) = json_response(
        &app,
        Request::builder()
            .method("POST")
            .uri(api_path("/login"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn session_survives_reload_until_logout() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config();
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));

    let first = build_session(&cfg.auth, storage.clone()).unwrap();
    first.init();
    first.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    let reloaded = build_session(&cfg.auth, Arc::new(FileStorage::new(dir.path()))).unwrap();
    match reloaded.init() {
        SessionStatus::Authenticated(user) => assert_eq!(user.email, TEST_EMAIL),
        other => panic!("expected restored session, got {other:?}"),
    }

    reloaded.logout().unwrap();
    let after_logout = build_session(&cfg.auth, storage).unwrap();
    assert_eq!(after_logout.init(), SessionStatus::Unauthenticated);
}
