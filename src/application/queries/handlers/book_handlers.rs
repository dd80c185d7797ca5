//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::application::queries::{GetBook, ListBooks};
use crate::domain::Book;

/// ListBooks Handler
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<Book>, ApplicationError> {
        Ok(self.book_repo.find_all().await?)
    }
}

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        self.book_repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.id))
    }
}
