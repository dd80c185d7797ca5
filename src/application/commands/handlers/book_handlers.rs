//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddBook, DeleteBook};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::domain::Book;

// ============================================================================
// AddBook
// ============================================================================

/// AddBook Handler
///
/// 存储层不检查重复，书号唯一性在这里保证
pub struct AddBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl AddBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: AddBook) -> Result<Book, ApplicationError> {
        if self.book_repo.find_by_id(command.id).await?.is_some() {
            return Err(ApplicationError::conflict("Book", command.id));
        }

        let mut book = Book::new(command.id, command.title);
        if let Some(author) = command.author {
            book = book.with_author(author);
        }

        let book = self.book_repo.add(book).await?;

        tracing::info!(
            book_id = %book.id(),
            title = %book.title(),
            "Book added"
        );

        Ok(book)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<Book, ApplicationError> {
        let book = self
            .book_repo
            .delete(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", command.id))?;

        tracing::info!(
            book_id = %book.id(),
            title = %book.title(),
            "Book deleted"
        );

        Ok(book)
    }
}
