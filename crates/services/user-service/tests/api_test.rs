//! Integration tests for API endpoints.
//!
//! The router runs on top of in-memory repositories, no database needed.

mod support;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_service_lib::api::create_router;

use crate::support::{app_state, InMemoryStore};

fn app() -> Router {
    create_router(app_state(&InMemoryStore::new()))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn hans() -> Value {
    json!({
        "email": "hujber@test.com",
        "firstName": "Hans",
        "surName": "Ujber",
        "gender": "MALE"
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_without_database() {
    let response = app()
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_location() {
    let response = app()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1.0/user/1"
    );
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(empty_request(Method::GET, &location))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "hujber@test.com");
    assert_eq!(body["firstName"], "Hans");
    assert_eq!(body["surName"], "Ujber");
    assert_eq!(body["gender"], "MALE");
    assert_eq!(body["organisationalUnit"], Value::Null);
}

#[tokio::test]
async fn test_create_user_with_invalid_email() {
    let mut user = hans();
    user["email"] = json!("hujber.test.com");

    let response = app()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", user))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_EMAIL");
    assert_eq!(body["error"]["message"], "Invalid email:hujber.test.com");
}

#[tokio::test]
async fn test_update_user_with_invalid_email() {
    let app = app();
    app.clone()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();

    let mut changed = hans();
    changed["email"] = json!("not an email");
    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, "/api/v1.0/user/1", changed))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "INVALID_EMAIL");

    let response = app
        .oneshot(empty_request(Method::GET, "/api/v1.0/user/1"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["email"], "hujber@test.com");
}

#[tokio::test]
async fn test_create_user_with_malformed_body() {
    let response = app()
        .oneshot(json_request(
            Method::POST,
            "/api/v1.0/user",
            json!({ "email": "hujber@test.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_missing_user() {
    let response = app()
        .oneshot(empty_request(Method::GET, "/api/v1.0/user/7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User not found with id:7");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let response = app()
        .oneshot(empty_request(Method::GET, "/api/v1.0/user/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_users() {
    let app = app();
    app.clone()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request(Method::GET, "/api/v1.0/user"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "hujber@test.com");
}

#[tokio::test]
async fn test_update_and_delete_user() {
    let app = app();
    app.clone()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();

    let mut changed = hans();
    changed["surName"] = json!("Ujberg");
    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, "/api/v1.0/user/1", changed))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1.0/user/1"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["surName"], "Ujberg");

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/v1.0/user/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request(Method::DELETE, "/api/v1.0/user/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Organisational units
// =============================================================================

#[tokio::test]
async fn test_assign_unit_to_user() {
    let app = app();
    app.clone()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1.0/organisational-unit",
            json!({ "name": "Accounting" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1.0/organisational-unit/1"
    );

    let response = app
        .clone()
        .oneshot(empty_request(Method::PUT, "/api/v1.0/user/1/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1.0/user/1"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["organisationalUnit"], "Accounting");

    let response = app
        .oneshot(empty_request(Method::GET, "/api/v1.0/organisational-unit/1"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["name"], "Accounting");
    assert_eq!(body["users"][0]["email"], "hujber@test.com");
}

#[tokio::test]
async fn test_assign_missing_unit() {
    let app = app();
    app.clone()
        .oneshot(json_request(Method::POST, "/api/v1.0/user", hans()))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request(Method::PUT, "/api/v1.0/user/1/9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"]["message"],
        "Organisational unit not found with id:9"
    );
}

#[tokio::test]
async fn test_delete_missing_unit() {
    let response = app()
        .oneshot(empty_request(
            Method::DELETE,
            "/api/v1.0/organisational-unit/3",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
