//! Book HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteBook, GetBook, ListBooks};
use crate::domain::BookId;
use crate::infrastructure::http::dto::{BookResponse, CreateBookRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取图书列表
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state
        .list_books_handler
        .handle(ListBooks)
        .await
        .map_err(|e| ApiError::from_application(e, "Server error retrieving books"))?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// 获取图书详情
///
/// 书号非数字时直接返回 400，不访问存储
/// 负数、小数等不可能存在的书号返回 404
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let id = parse_path_id(&raw_id)?;

    let book = state
        .get_book_handler
        .handle(GetBook { id })
        .await
        .map_err(|e| ApiError::from_application(e, "Server error retrieving book"))?;

    Ok(Json(BookResponse::from(book)))
}

/// 添加图书
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let command = req.into_command()?;

    let book = state
        .add_book_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from_application(e, "Server error adding book"))?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// 删除图书
///
/// 书号不存在时返回 404
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id(&raw_id)?;

    state
        .delete_book_handler
        .handle(DeleteBook { id })
        .await
        .map_err(|e| ApiError::from_application(e, "Server error deleting book"))?;

    Ok(StatusCode::NO_CONTENT)
}

/// 非数字返回 400；是数字但不可能是书号时直接按不存在处理（404），不访问存储
fn parse_path_id(raw_id: &str) -> Result<BookId, ApiError> {
    BookId::from_path(raw_id)?.ok_or_else(|| ApiError::NotFound("Book not found".to_string()))
}
