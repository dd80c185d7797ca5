//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// 书号不是合法的非负整数
    #[error("ID must be a number")]
    InvalidId(String),

    #[error("Book id is required")]
    MissingId,

    #[error("Book title is required")]
    MissingTitle,
}
