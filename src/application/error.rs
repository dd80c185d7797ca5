//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::{BookError, BookId};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: BookId,
    },

    /// 资源已存在
    #[error("{resource_type} already exists: {id}")]
    Conflict {
        resource_type: &'static str,
        id: BookId,
    },

    /// 验证错误
    #[error(transparent)]
    Validation(#[from] BookError),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: BookId) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建 Conflict 错误
    pub fn conflict(resource_type: &'static str, id: BookId) -> Self {
        Self::Conflict { resource_type, id }
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
