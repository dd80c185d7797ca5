//! Ping Handler
//!
//! 健康检查端点

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub books: Option<usize>,
}

/// Ping endpoint - 健康检查，附带当前藏书数量（存储不可用时为 null）
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let books = state.book_repo.find_all().await.ok().map(|books| books.len());

    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}
