//! HTTP Error Handling
//!
//! `/api/books` 系列的错误响应体:
//! - 一般错误: `{"error": "..."}`
//! - 字段校验错误: `{"message": "..."}`
//! - 未捕获的内部错误: `{"message": "Internal Server Error", "error": <诊断信息，可选>}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::BookError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }

    /// 未捕获错误的通用响应；`detail` 仅在开启诊断时传入
    pub fn internal(detail: Option<String>) -> Self {
        Self {
            message: Some("Internal Server Error".to_string()),
            error: detail,
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// 必填字段缺失，响应体使用 `message` 键
    Validation(String),
    NotFound(String),
    Conflict(String),
    /// `message` 返回给客户端，`detail` 只写日志
    Internal { message: String, detail: String },
}

impl ApiError {
    /// 将应用层错误映射为 HTTP 错误
    ///
    /// `internal_message` 为该路由的 500 响应文案
    pub fn from_application(err: ApplicationError, internal_message: &str) -> Self {
        match err {
            ApplicationError::NotFound { resource_type, .. } => {
                ApiError::NotFound(format!("{} not found", resource_type))
            }
            ApplicationError::Conflict { resource_type, .. } => {
                ApiError::Conflict(format!("{} already exists", resource_type))
            }
            ApplicationError::Validation(e) => ApiError::from(e),
            ApplicationError::RepositoryError(detail) => ApiError::Internal {
                message: internal_message.to_string(),
                detail,
            },
        }
    }
}

impl From<BookError> for ApiError {
    fn from(e: BookError) -> Self {
        match e {
            BookError::MissingTitle => ApiError::Validation(e.to_string()),
            BookError::InvalidId(_) | BookError::MissingId => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::error(msg))
            }
            ApiError::Validation(msg) => {
                tracing::warn!(error = %msg, "Validation failed");
                (StatusCode::BAD_REQUEST, ErrorResponse::message(msg))
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::error(msg))
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "Resource conflict");
                (StatusCode::CONFLICT, ErrorResponse::error(msg))
            }
            ApiError::Internal { message, detail } => {
                tracing::error!(error = %detail, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::error(message))
            }
        };

        (status, Json(response)).into_response()
    }
}
