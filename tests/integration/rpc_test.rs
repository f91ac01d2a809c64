//! Integration tests for the RPC binding.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::{PASSWORD, TestApp};

fn code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_signup_and_refresh_over_rpc() {
    let app = TestApp::new().await;

    let signup = app
        .rpc(
            "UserService/SignUpUser",
            json!({ "login": "alice", "password": PASSWORD }),
            None,
        )
        .await;
    assert_eq!(signup.status, StatusCode::OK);
    let tokens = signup.body["result"].clone();

    let params = json!({
        "access_token": tokens["access_token"],
        "refresh_token": tokens["refresh_token"],
    });
    let first = app.rpc("UserService/RefreshToken", params.clone(), None).await;
    assert!(first.body.get("error").is_none(), "{:?}", first.body);

    let replay = app.rpc("UserService/RefreshToken", params, None).await;
    assert_eq!(code(&replay.body), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_unknown_method_is_invalid_argument() {
    let app = TestApp::new().await;
    let response = app.rpc("CarService/Teleport", json!({}), None).await;
    assert_eq!(code(&response.body), "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_car_methods_check_access_before_params() {
    let app = TestApp::new().await;

    let anonymous = app.rpc("CarService/GetAllCars", Value::Null, None).await;
    assert_eq!(code(&anonymous.body), "UNAUTHENTICATED");

    let (user, _) = app.signup("alice").await;
    let denied = app.rpc("CarService/DeleteCar", json!({}), Some(&user)).await;
    assert_eq!(code(&denied.body), "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_car_lifecycle_over_rpc() {
    let app = TestApp::new().await;
    let (user, _) = app.signup("alice").await;
    let admin = app.bootstrap_admin("root").await;

    let created = app
        .rpc(
            "CarService/CreateCar",
            json!({ "brand": "Toyota", "production_year": 2005, "is_running": true }),
            Some(&user),
        )
        .await;
    let id = created.body["result"]["id"].clone();
    assert!(id.is_string(), "{:?}", created.body);

    let updated = app
        .rpc(
            "CarService/UpdateCar",
            json!({ "id": id, "brand": "Honda", "production_year": 2010, "is_running": true }),
            Some(&user),
        )
        .await;
    assert_eq!(updated.body["result"]["brand"], "Honda");

    let fetched = app
        .rpc("CarService/GetCar", json!({ "id": id }), Some(&user))
        .await;
    assert_eq!(fetched.body["result"]["brand"], "Honda");

    let deleted = app
        .rpc("CarService/DeleteCar", json!({ "id": id }), Some(&admin))
        .await;
    assert!(deleted.body.get("error").is_none(), "{:?}", deleted.body);

    let gone = app
        .rpc("CarService/GetCar", json!({ "id": id }), Some(&user))
        .await;
    assert_eq!(code(&gone.body), "NOT_FOUND");

    let listed = app.rpc("CarService/GetAllCars", Value::Null, Some(&user)).await;
    assert_eq!(listed.body["result"], json!([]));
}

#[tokio::test]
async fn test_invalid_year_over_rpc() {
    let app = TestApp::new().await;
    let (user, _) = app.signup("alice").await;

    let response = app
        .rpc(
            "CarService/CreateCar",
            json!({ "brand": "Ford", "production_year": 1900, "is_running": true }),
            Some(&user),
        )
        .await;
    assert_eq!(code(&response.body), "INVALID_ARGUMENT");
}
