//! Integration tests for the identity flow over REST.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_signup_returns_token_pair() {
    let app = TestApp::new().await;
    let (access, refresh) = app.signup("alice").await;
    assert!(!access.is_empty());
    assert_ne!(access, refresh);
}

#[tokio::test]
async fn test_duplicate_login_conflicts() {
    let app = TestApp::new().await;
    app.signup("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "login": "alice", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "LOGIN_TAKEN");
}

#[tokio::test]
async fn test_signup_validates_credentials() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "login": "bob", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_login_look_alike() {
    let app = TestApp::new().await;
    app.signup("alice").await;

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "login": "alice", "password": "not-the-password" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "login": "nobody", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, unknown.status);
    assert_eq!(wrong.body, unknown.body);
}

#[tokio::test]
async fn test_refresh_token_is_single_use() {
    let app = TestApp::new().await;
    let (access, refresh) = app.signup("alice").await;
    let body = json!({ "access_token": access, "refresh_token": refresh });

    let first = app
        .request("POST", "/api/auth/refresh", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let (new_access, new_refresh) = first.tokens();
    assert_ne!(new_refresh, refresh);

    let replay = app
        .request("POST", "/api/auth/refresh", Some(body), None)
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(replay.error_code(), "REFRESH_TOKEN_REVOKED");

    let rotated = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "access_token": new_access, "refresh_token": new_refresh })),
            None,
        )
        .await;
    assert_eq!(rotated.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_revokes_previous_refresh_token() {
    let app = TestApp::new().await;
    let (access, refresh) = app.signup("alice").await;

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "login": "alice", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let stale = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "access_token": access, "refresh_token": refresh })),
            None,
        )
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_other_users_access_token() {
    let app = TestApp::new().await;
    let (alice_access, _) = app.signup("alice").await;
    let (_, bob_refresh) = app.signup("bobby").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "access_token": alice_access, "refresh_token": bob_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "CLAIM_MISMATCH");
}

#[tokio::test]
async fn test_admin_signup_requires_admin_token() {
    let app = TestApp::new().await;
    let body = json!({ "login": "second", "password": PASSWORD });

    let anonymous = app
        .request("POST", "/api/auth/signup/admin", Some(body.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let (user_access, _) = app.signup("alice").await;
    let as_user = app
        .request(
            "POST",
            "/api/auth/signup/admin",
            Some(body.clone()),
            Some(&user_access),
        )
        .await;
    assert_eq!(as_user.status, StatusCode::FORBIDDEN);

    let admin = app.bootstrap_admin("root").await;
    let as_admin = app
        .request("POST", "/api/auth/signup/admin", Some(body), Some(&admin))
        .await;
    assert_eq!(as_admin.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_reports_memory_backends() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
