use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn authed_request(method: &str, uri: &str, token: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
        .body(body.to_string())
        .unwrap()
}

async fn register(app: &axum::Router, email: &str) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            &format!(
                r#"{{"fullName":"Siti","email":"{email}","password":"secret"}}"#
            ),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    body["data"]["accessToken"].as_str().unwrap().to_string()
}

// --- auth ---

#[tokio::test]
async fn register_then_login() {
    let app = app();
    register(&app, "siti@example.com").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            r#"{"email":"siti@example.com","password":"secret"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "siti@example.com");
    assert!(body["data"]["accessToken"].is_string());
}

#[tokio::test]
async fn duplicate_registration_is_an_envelope_failure() {
    let app = app();
    register(&app, "siti@example.com").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            r#"{"fullName":"Siti","email":"siti@example.com","password":"other"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn wrong_password_returns_401_with_message_body() {
    let app = app();
    register(&app, "siti@example.com").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            r#"{"email":"siti@example.com","password":"wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn forgot_password_succeeds_without_data() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/forgot-password",
            r#"{"email":"siti@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body.get("data").is_none());
}

// --- kos ---

#[tokio::test]
async fn kos_list_is_seeded_and_searchable() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/kos").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/kos?search=bandung")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp).await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Kos Melati");
}

#[tokio::test]
async fn unknown_kos_is_404_with_message() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/kos/999").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Kos not found");
}

#[tokio::test]
async fn sparse_kos_record_serializes_nulls() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/kos/2").body(String::new()).unwrap())
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["data"]["description"].is_null());
    assert!(body["data"]["rating"].is_null());
    assert_eq!(body["data"]["type"], "putra");
}

// --- bookings ---

#[tokio::test]
async fn booking_requires_bearer_token() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/bookings",
            r#"{"kosId":1,"bookingType":"monthly","roomQuantity":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn booking_lifecycle() {
    let app = app();
    let token = register(&app, "siti@example.com").await;

    let resp = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/bookings",
            &token,
            r#"{"kosId":1,"bookingType":"monthly","roomQuantity":2,"note":"lantai 2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalPrice"], 2_400_000);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["kos"]["name"], "Kos Melati");
    let id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(authed_request("DELETE", &format!("/bookings/{id}"), &token, ""))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);

    let resp = app
        .oneshot(authed_request("GET", &format!("/bookings/{id}"), &token, ""))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["data"]["status"], "cancelled");
}

// --- favorites ---

#[tokio::test]
async fn favorite_flow_and_duplicate_failure() {
    let app = app();
    let token = register(&app, "siti@example.com").await;

    let resp = app
        .clone()
        .oneshot(authed_request("POST", "/favorites", &token, r#"{"kosId":2}"#))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["kos"]["id"], 2);
    let id = body["data"]["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(authed_request("POST", "/favorites", &token, r#"{"kosId":2}"#))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Already in favorites");

    let resp = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            &format!("/favorites/{id}"),
            &token,
            "",
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);

    let resp = app
        .oneshot(authed_request("GET", "/favorites", &token, ""))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
