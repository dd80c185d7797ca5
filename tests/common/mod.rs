//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

use in_n_out_books::application::{BookRepositoryPort, RepositoryError};
use in_n_out_books::domain::{Book, BookId};
use in_n_out_books::infrastructure::http::{AppState, HttpServer, ServerConfig};

// =============================================================================
// FailingBookRepository - 每个操作都失败的存储
// =============================================================================

pub struct FailingBookRepository;

fn failure() -> RepositoryError {
    RepositoryError::StorageError("store unavailable".to_string())
}

#[async_trait]
impl BookRepositoryPort for FailingBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: BookId) -> Result<Option<Book>, RepositoryError> {
        Err(failure())
    }

    async fn add(&self, _book: Book) -> Result<Book, RepositoryError> {
        Err(failure())
    }

    async fn delete(&self, _id: BookId) -> Result<Option<Book>, RepositoryError> {
        Err(failure())
    }

    async fn reset(&self, _books: Vec<Book>) -> Result<(), RepositoryError> {
        Err(failure())
    }
}

// =============================================================================
// Request helpers
// =============================================================================

pub fn app(repo: Arc<dyn BookRepositoryPort>) -> Router {
    HttpServer::new(ServerConfig::default(), AppState::new(repo)).router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        content_type,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}
