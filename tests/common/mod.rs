//! Shared fixtures: a seeded in-memory store and a request helper driving the full router.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::{app, ApiSettings, AppState, Category, MemoryTriviaStore, NewQuestion, Question, StoreError};

pub const TOTAL_QUESTIONS: usize = 25;
pub const SCIENCE_QUESTIONS: usize = 12;

pub fn categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .enumerate()
        .map(|(i, kind)| Category {
            id: i as i32 + 1,
            kind: kind.to_string(),
        })
        .collect()
}

/// Ids 1..=25. Category 1 holds 12 questions, more than a page; categories 5 and 6 are empty.
/// Only ids 5 and 14 contain "who".
pub fn questions() -> Vec<Question> {
    (1..=TOTAL_QUESTIONS as i32)
        .map(|id| {
            let category = match id {
                1..=12 => 1,
                13..=18 => 2,
                19..=22 => 3,
                _ => 4,
            };
            let text = match id {
                5 => "Who created the comic strip Peanuts?".to_string(),
                14 => "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".to_string(),
                _ => format!("Question number {id}"),
            };
            Question {
                id,
                question: Some(text),
                answer: Some(format!("Answer {id}")),
                difficulty: Some(id % 5 + 1),
                category: Some(category),
            }
        })
        .collect()
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryTriviaStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(ApiSettings::default())
    }

    pub fn with_settings(settings: ApiSettings) -> Self {
        Self::build(MemoryTriviaStore::with_data(categories(), questions()), settings)
    }

    pub fn empty() -> Self {
        Self::build(MemoryTriviaStore::with_data(categories(), Vec::new()), ApiSettings::default())
    }

    pub fn build(store: MemoryTriviaStore, settings: ApiSettings) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), settings);
        TestApp {
            router: app(state, static_dir()),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.raw(request).await
    }

    pub async fn raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/static")
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("numeric id"))
        .collect()
}

/// Every operation fails, as if the database were unreachable.
pub struct FailingStore;

#[async_trait::async_trait]
impl trivia_api::TriviaStore for FailingStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn find_category(&self, _id: i32) -> Result<Option<Category>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn find_question(&self, _id: i32) -> Result<Option<Question>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn insert_question(&self, _new: NewQuestion) -> Result<Question, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn delete_question(&self, _id: i32) -> Result<bool, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn questions_in_category(&self, _category: i32) -> Result<Vec<Question>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
}

pub fn failing_app() -> Router {
    let state = AppState::new(Arc::new(FailingStore), ApiSettings::default());
    app(state, static_dir())
}
