//! In-Memory Book Repository Implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::{collection, Book, BookId};

/// 内存图书存储
///
/// 进程内的有序序列，保持插入顺序；读写都委托给集合访问器
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError> {
        let books = self.books.read().await;
        Ok(collection::find(&books))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let books = self.books.read().await;
        Ok(collection::find_one(&books, id).cloned())
    }

    async fn add(&self, book: Book) -> Result<Book, RepositoryError> {
        let mut books = self.books.write().await;
        let book = collection::add(&mut books, book);
        tracing::debug!(book_id = %book.id(), total = books.len(), "Book stored");
        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let mut books = self.books.write().await;
        let removed = collection::delete(&mut books, id);
        if removed.is_some() {
            tracing::debug!(book_id = %id, total = books.len(), "Book removed");
        }
        Ok(removed)
    }

    async fn reset(&self, seed: Vec<Book>) -> Result<(), RepositoryError> {
        let mut books = self.books.write().await;
        *books = seed;
        tracing::debug!(total = books.len(), "Book store reset");
        Ok(())
    }
}
