//! Book Commands

use crate::domain::{BookId, Title};

/// 添加图书命令
#[derive(Debug, Clone)]
pub struct AddBook {
    pub id: BookId,
    pub title: Title,
    pub author: Option<String>,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub id: BookId,
}
