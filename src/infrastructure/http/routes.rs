//! HTTP Routes
//!
//! API Endpoints:
//! - /                   GET     首页（HTML）
//! - /api/ping           GET     健康检查
//! - /api/books          GET     列出所有图书（也接受 /api/books/）
//! - /api/books          POST    添加图书
//! - /api/books/:id      GET     获取图书详情
//! - /api/books/:id      DELETE  删除图书
//! - 其他                 -       404 页面（HTML）

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 已知路径上未注册的方法同样返回 404 页面
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::landing_page).fallback(handlers::not_found),
        )
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::not_found),
        )
        .route("/books", book_collection_routes())
        .route("/books/", book_collection_routes())
        .route(
            "/books/:id",
            get(handlers::get_book)
                .delete(handlers::delete_book)
                .fallback(handlers::not_found),
        )
}

/// `/books` 与 `/books/` 共用
fn book_collection_routes() -> MethodRouter<Arc<AppState>> {
    get(handlers::list_books)
        .post(handlers::add_book)
        .fallback(handlers::not_found)
}
