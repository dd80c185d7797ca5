//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::AddBook;
use crate::domain::{Book, BookError, BookId, Title};

// ============================================================================
// Book DTOs
// ============================================================================

/// 图书响应，`id` 始终序列化为数字
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id().value(),
            title: book.title().to_string(),
            author: book.author().map(str::to_string),
        }
    }
}

/// 添加图书请求
///
/// `id` 接受数字或数字字符串（如 `"1"`），校验在 `into_command` 中完成
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl CreateBookRequest {
    /// 校验顺序：标题、书号
    pub fn into_command(self) -> Result<AddBook, BookError> {
        let title = Title::new(self.title.unwrap_or_default())?;
        let id = match self.id {
            None | Some(Value::Null) => return Err(BookError::MissingId),
            Some(value) => parse_book_id(&value)?,
        };

        Ok(AddBook {
            id,
            title,
            author: self.author,
        })
    }
}

fn parse_book_id(value: &Value) -> Result<BookId, BookError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(BookId::new)
            .ok_or_else(|| BookError::InvalidId(n.to_string())),
        Value::String(s) => s.parse(),
        other => Err(BookError::InvalidId(other.to_string())),
    }
}
