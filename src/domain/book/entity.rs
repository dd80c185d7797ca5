//! Book Context - Entity

use serde::Serialize;

use super::{BookId, Title};
use crate::domain::collection::Keyed;

/// 图书实体
///
/// 不变量:
/// - 书号由调用方提供，不自动生成
/// - 创建后不可原地修改，只能整体删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl Book {
    pub fn new(id: BookId, title: Title) -> Self {
        Self {
            id,
            title,
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        let author = author.into();
        self.author = if author.trim().is_empty() {
            None
        } else {
            Some(author)
        };
        self
    }

    // Getters
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl Keyed for Book {
    type Key = BookId;

    fn key(&self) -> BookId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serializes_flat() {
        let book = Book::new(BookId::new(1), Title::new("The Hobbit").unwrap())
            .with_author("J.R.R. Tolkien");
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "The Hobbit");
        assert_eq!(json["author"], "J.R.R. Tolkien");
    }

    #[test]
    fn test_book_without_author_omits_field() {
        let book = Book::new(BookId::new(2), Title::new("Test Book").unwrap()).with_author(" ");
        let json = serde_json::to_value(&book).unwrap();

        assert!(json.get("author").is_none());
        assert_eq!(book.author(), None);
    }
}
