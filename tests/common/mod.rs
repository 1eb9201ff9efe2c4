//! Common test infrastructure for API tests.
//!
//! Builds the full router over a chosen store and drives it with
//! `tower::ServiceExt::oneshot`, decoding every body as JSON.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trivia::http_server::{HttpServer, HttpServerConfig};
use trivia::quiz::QuizSelector;
use trivia::rest_api::TriviaState;
use trivia::store::{MemoryStore, NewQuestion, SqliteStore, TriviaStore};

// ============================================================================
// App Construction
// ============================================================================

/// Router over `store` with a fixed quiz seed
pub fn app_with(store: Arc<dyn TriviaStore>) -> Router {
    let state = Arc::new(TriviaState::with_selector(store, QuizSelector::with_seed(7)));
    HttpServer::new(HttpServerConfig::default(), state).router()
}

pub fn memory_store() -> Arc<dyn TriviaStore> {
    Arc::new(MemoryStore::new())
}

pub async fn sqlite_store() -> Arc<dyn TriviaStore> {
    Arc::new(SqliteStore::in_memory().await.unwrap())
}

// ============================================================================
// Fixtures
// ============================================================================

pub async fn add_category(store: &Arc<dyn TriviaStore>, kind: &str) -> i64 {
    store.create_category(kind).await.unwrap().id
}

pub async fn add_question(store: &Arc<dyn TriviaStore>, text: &str, category: i64) -> i64 {
    store
        .insert_question(NewQuestion {
            question: text.to_string(),
            answer: format!("answer to {}", text),
            category,
            difficulty: 2,
        })
        .await
        .unwrap()
        .id
}

pub fn question_body(category: i64) -> Value {
    json!({
        "question": "What is the capital of Greece?",
        "answer": "Athens",
        "category": category,
        "difficulty": 2
    })
}

// ============================================================================
// Request Helpers
// ============================================================================

/// Send one request and return the status and decoded JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Assert the uniform error envelope
pub fn assert_error(status: StatusCode, body: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code, "unexpected status, body: {}", body);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
