//! Integration tests for the car inventory over REST.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

fn toyota() -> serde_json::Value {
    json!({ "brand": "Toyota", "production_year": 2005, "is_running": true })
}

#[tokio::test]
async fn test_inventory_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/cars", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");

    let garbage = app
        .request("GET", "/api/cars", None, Some("not-a-jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_update_get_flow() {
    let app = TestApp::new().await;
    let (token, _) = app.signup("alice").await;

    let created = app
        .request("POST", "/api/cars", Some(toyota()), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/cars/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["brand"], "Toyota");

    let updated = app
        .request(
            "PUT",
            &format!("/api/cars/{id}"),
            Some(json!({ "brand": "Honda", "production_year": 2010, "is_running": false })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let fetched = app
        .request("GET", &format!("/api/cars/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.body["data"]["brand"], "Honda");
    assert_eq!(fetched.body["data"]["production_year"], 2010);
    assert_eq!(fetched.body["data"]["is_running"], false);

    let listed = app.request("GET", "/api/cars", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_invalid_car_rejected() {
    let app = TestApp::new().await;
    let (token, _) = app.signup("alice").await;

    for body in [
        json!({ "brand": "", "production_year": 2005, "is_running": true }),
        json!({ "brand": "Ford", "production_year": 1949, "is_running": true }),
        json!({ "brand": "Ford", "production_year": 2024, "is_running": true }),
    ] {
        let response = app
            .request("POST", "/api/cars", Some(body), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code(), "VALIDATION");
    }
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = TestApp::new().await;
    let (token, _) = app.signup("alice").await;

    let missing = app
        .request(
            "GET",
            &format!("/api/cars/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("GET", "/api/cars/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let update_missing = app
        .request(
            "PUT",
            &format!("/api/cars/{}", uuid::Uuid::new_v4()),
            Some(toyota()),
            Some(&token),
        )
        .await;
    assert_eq!(update_missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_admin_only() {
    let app = TestApp::new().await;
    let (user, _) = app.signup("alice").await;
    let admin = app.bootstrap_admin("root").await;

    let created = app
        .request("POST", "/api/cars", Some(toyota()), Some(&user))
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();
    let path = format!("/api/cars/{id}");

    let denied = app.request("DELETE", &path, None, Some(&user)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.error_code(), "FORBIDDEN");

    let deleted = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&user)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
