//! HTTP Middleware
//!
//! - HTTP 状态码错误日志中间件
//! - 处理器 panic 的兜底 500 响应

use std::any::Any;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::error::ErrorResponse;

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 构造 `CatchPanicLayer` 使用的 panic 响应
///
/// `expose_errors` 为 true 时在 `error` 字段中返回 panic 信息
pub fn panic_response(
    expose_errors: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |payload: Box<dyn Any + Send + 'static>| {
        let detail = panic_message(payload.as_ref());
        tracing::error!(error = %detail, "Handler panicked");

        let body = ErrorResponse::internal(expose_errors.then_some(detail));
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request as HttpRequest,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn not_found_handler() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn panic_handler() -> &'static str {
        panic!("shelf collapsed")
    }

    fn create_test_router(expose_errors: bool) -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/not-found", get(not_found_handler))
            .route("/panic", get(panic_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
            .layer(CatchPanicLayer::custom(panic_response(expose_errors)))
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_ok_response_passes_through() {
        let (status, _) = call(create_test_router(false), "/ok").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_error_passes_through() {
        let (status, _) = call(create_test_router(false), "/not-found").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_panic_hides_detail_by_default() {
        let (status, body) = call(create_test_router(false), "/panic").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_panic_exposes_detail_when_enabled() {
        let (status, body) = call(create_test_router(true), "/panic").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
        assert_eq!(body["error"], "shelf collapsed");
    }
}
