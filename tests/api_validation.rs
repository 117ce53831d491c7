//! Router-level tests that never reach a database. The state's pool points at
//! an unreachable address, so anything that gets past validation fails with 500.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use leaderboard_api::{app::build_app, state::AppState};

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = build_app(AppState::fake())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn full_attributes() -> Value {
    json!({"score": 10, "coin": 3, "greenSkin": 1, "redSkin": 0, "blueSkin": 0})
}

#[tokio::test]
async fn ping_reports_ok_and_time() {
    let (status, body) = send(Method::GET, "/api/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    let time = body["time"].as_str().expect("time is a string");
    assert!(time.contains('T'), "time: {time}");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = send(Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_user_requires_both_fields() {
    for body in [
        json!({}),
        json!({"username": "alice"}),
        json!({"password": "secret"}),
        json!({"username": "", "password": "secret"}),
    ] {
        let (status, resp) = send(Method::POST, "/api/create_user", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp, json!({"error": "Missing username or password"}));
    }
}

#[tokio::test]
async fn login_requires_both_fields() {
    let (status, resp) = send(Method::POST, "/api/login", Some(json!({"username": "alice"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let resp = build_app(AppState::fake())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "Invalid request body"}));
}

#[tokio::test]
async fn missing_content_type_is_400() {
    let resp = build_app(AppState::fake())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/create_user")
                .body(Body::from(r#"{"username":"a","password":"b"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_data_rejects_invalid_ids() {
    for id in ["abc", "0", "-1", "1.5", "99999999999"] {
        let (status, resp) = send(Method::GET, &format!("/api/user_data/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id}");
        assert_eq!(resp, json!({"error": "Invalid user id"}));
    }
}

#[tokio::test]
async fn create_attributes_rejects_invalid_player_id() {
    let (status, resp) = send(
        Method::POST,
        "/api/create_attributes/abc",
        Some(full_attributes()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": "Invalid player id"}));
}

#[tokio::test]
async fn create_attributes_rejects_out_of_range_skin() {
    let (status, resp) = send(
        Method::POST,
        "/api/create_attributes/1",
        Some(json!({"score": 1, "coin": 1, "greenSkin": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": "greenSkin must be 0 or 1"}));
}

#[tokio::test]
async fn update_attributes_rejects_invalid_player_id() {
    let (status, _) = send(
        Method::PUT,
        "/api/update_attributes/-4",
        Some(full_attributes()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_attributes_requires_all_fields() {
    let (status, resp) = send(
        Method::PUT,
        "/api/update_attributes/1",
        Some(json!({"score": 10, "coin": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].as_str().unwrap().starts_with("Missing required fields"));
}

#[tokio::test]
async fn update_attributes_rejects_skin_outside_zero_one() {
    for bad in [json!(2), json!(-1), json!(10)] {
        let mut body = full_attributes();
        body["blueSkin"] = bad.clone();
        let (status, resp) = send(Method::PUT, "/api/update_attributes/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "blueSkin {bad}");
        assert_eq!(resp, json!({"error": "blueSkin must be 0 or 1"}));
    }
}

#[tokio::test]
async fn update_attributes_does_not_coerce_strings() {
    let mut body = full_attributes();
    body["score"] = json!("10");
    let (status, resp) = send(Method::PUT, "/api/update_attributes/1", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": "Invalid request body"}));
}

#[tokio::test]
async fn body_errors_do_not_expose_type_names() {
    let (status, resp) = send(
        Method::POST,
        "/api/create_attributes/1",
        Some(json!(["not", "an", "object"])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let msg = resp["error"].as_str().unwrap();
    assert_eq!(msg, "Invalid request body");
    assert!(!msg.contains("AttributesRequest"));
}

#[tokio::test]
async fn update_attributes_also_accepts_post() {
    let (status, _) = send(
        Method::POST,
        "/api/update_attributes/1",
        Some(json!({"score": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn legacy_score_requires_player_and_nonzero_score() {
    for body in [json!({"player": "bob"}), json!({"player": "bob", "score": 0})] {
        let (status, resp) = send(Method::POST, "/api/scores", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(resp, json!({"error": "Missing data"}));
    }
}

#[tokio::test]
async fn database_failure_is_generic_500() {
    let (status, resp) = send(Method::GET, "/api/scores", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn valid_login_without_database_is_500() {
    let (status, resp) = send(
        Method::POST,
        "/api/login",
        Some(json!({"username": "alice", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, json!({"error": "Internal server error"}));
}
