mod common;

use axum::http::StatusCode;
use common::{assert_error, TestApp};
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn draws_from_the_requested_category() {
    let app = TestApp::new();
    let previous = [1, 4, 20, 15];
    let (status, body) = app
        .post("/quizzes", json!({ "previous_questions": previous, "quiz_category": { "id": 1 } }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let question = body["question"].as_object().expect("a question");
    for key in ["id", "question", "answer", "difficulty", "category"] {
        assert!(question.contains_key(key), "missing {key}");
    }
    assert_eq!(question["category"], 1);
    assert!(!previous.contains(&question["id"].as_i64().unwrap()));
}

#[tokio::test]
async fn category_zero_draws_from_every_question() {
    let app = TestApp::new();
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let (status, body) = app
            .post("/quizzes", json!({ "previous_questions": [], "quiz_category": { "type": "click", "id": 0 } }))
            .await;
        assert_eq!(status, StatusCode::OK);
        seen.insert(body["question"]["category"].as_i64().unwrap());
    }
    assert_eq!(seen, HashSet::from([1, 2, 3, 4]));
}

#[tokio::test]
async fn playing_through_a_category_never_repeats() {
    let app = TestApp::new();
    let mut previous: Vec<i64> = Vec::new();
    loop {
        let (status, body) = app
            .post("/quizzes", json!({ "previous_questions": previous, "quiz_category": { "id": "3" } }))
            .await;
        assert_eq!(status, StatusCode::OK);
        if body["question"].is_null() {
            break;
        }
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {id} repeated");
        previous.push(id);
    }
    previous.sort_unstable();
    assert_eq!(previous, vec![19, 20, 21, 22]);
}

#[tokio::test]
async fn empty_pool_is_422() {
    let app = TestApp::new();
    for category in [5, 100] {
        let (status, body) = app
            .post("/quizzes", json!({ "previous_questions": [], "quiz_category": { "id": category } }))
            .await;
        assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    }
}

#[tokio::test]
async fn missing_quiz_category_is_422() {
    let app = TestApp::new();
    let (status, body) = app.post("/quizzes", json!({ "previous_questions": [] })).await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");

    let (status, body) = app
        .post("/quizzes", json!({ "previous_questions": [], "quiz_category": { "type": "Art" } }))
        .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
}

#[tokio::test]
async fn wrongly_typed_quiz_fields_are_422() {
    let app = TestApp::new();
    for body in [
        json!({ "previous_questions": [], "quiz_category": { "type": "Science", "id": "abc" } }),
        json!({ "previous_questions": [], "quiz_category": "Science" }),
        json!({ "previous_questions": 5, "quiz_category": { "id": 1 } }),
        json!({ "previous_questions": ["first"], "quiz_category": { "id": 1 } }),
    ] {
        let (status, body) = app.post("/quizzes", body).await;
        assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    }
}
