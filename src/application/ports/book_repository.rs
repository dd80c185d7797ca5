//! Book Repository Port - 出站端口
//!
//! 定义图书存储的抽象接口
//! 具体实现在 infrastructure 层（内存实现）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Book, BookId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Book Repository Port
///
/// 存储本身不检查书号重复，重复检查由调用方负责
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 获取所有图书（按插入顺序）
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError>;

    /// 根据书号查找图书
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 追加图书，返回追加的记录
    async fn add(&self, book: Book) -> Result<Book, RepositoryError>;

    /// 删除图书，返回被删除的记录；不存在时返回 None
    async fn delete(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 清空并用给定记录重新填充
    async fn reset(&self, books: Vec<Book>) -> Result<(), RepositoryError>;

    /// 清空存储
    async fn clear(&self) -> Result<(), RepositoryError> {
        self.reset(Vec::new()).await
    }
}
