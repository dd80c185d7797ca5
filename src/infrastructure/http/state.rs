//! Application State
//!
//! 注入到路由的应用状态，持有图书存储与所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    AddBookHandler, BookRepositoryPort, DeleteBookHandler, GetBookHandler, ListBooksHandler,
};

/// 应用状态
///
/// 存储以 `Arc<dyn BookRepositoryPort>` 注入，测试可替换或重置
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub add_book_handler: AddBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub list_books_handler: ListBooksHandler,
    pub get_book_handler: GetBookHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self {
            book_repo: book_repo.clone(),

            add_book_handler: AddBookHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            list_books_handler: ListBooksHandler::new(book_repo.clone()),
            get_book_handler: GetBookHandler::new(book_repo),
        }
    }
}
