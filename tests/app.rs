mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{assert_error, TestApp};
use tower::ServiceExt;
use trivia_api::{app, ApiSettings, AppState, MemoryTriviaStore};
use std::sync::Arc;

#[tokio::test]
async fn health_ready_and_version() {
    let app = TestApp::new();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (_, body) = app.get("/version").await;
    assert_eq!(body["name"], "trivia-api");
}

#[tokio::test]
async fn unknown_routes_use_the_envelope() {
    let app = TestApp::new();
    let (status, body) = app.get("/does/not/exist").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn serves_the_front_end_index() {
    let app = TestApp::new();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("<div id=\"root\">"));
}

#[tokio::test]
async fn missing_static_directory_still_answers_404_envelopes() {
    let state = AppState::new(Arc::new(MemoryTriviaStore::new()), ApiSettings::default());
    let router = app(state, "/nonexistent/trivia/build");
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    let methods = headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap().to_str().unwrap();
    assert!(methods.contains("DELETE"));

    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}

#[tokio::test]
async fn store_failures_take_each_route_status() {
    let router = common::failing_app();
    let cases = [
        (Method::GET, "/categories", None, StatusCode::BAD_REQUEST),
        (Method::GET, "/questions", None, StatusCode::NOT_FOUND),
        (Method::DELETE, "/questions/1", None, StatusCode::UNPROCESSABLE_ENTITY),
        (Method::POST, "/questions", Some(r#"{"question":"q"}"#), StatusCode::UNPROCESSABLE_ENTITY),
        (Method::POST, "/questions/search", Some(r#"{"searchTerm":"q"}"#), StatusCode::NOT_FOUND),
        (Method::GET, "/categories/1/questions", None, StatusCode::BAD_REQUEST),
        (
            Method::POST,
            "/quizzes",
            Some(r#"{"previous_questions":[],"quiz_category":{"id":0}}"#),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
    ];
    for (method, uri, body, expected) in cases {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), expected, "{uri}");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], expected.as_u16());
    }
}

#[tokio::test]
async fn readiness_reports_an_unreachable_store() {
    let response = common::failing_app()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
