//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::user::{UserError, UserId};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: UserId,
    },

    /// 存储拒绝创建（未返回记录）
    #[error("{resource_type} was not created")]
    CreationRejected { resource_type: &'static str },

    /// 创建后的记录缺少必填字段
    #[error("Incomplete record {id}: missing {}", .missing.join(", "))]
    IncompleteRecord {
        id: UserId,
        missing: Vec<&'static str>,
    },

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 记录格式错误
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: UserId) -> Self {
        Self::NotFound { resource_type, id }
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<serde_json::Error> for ApplicationError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRecord(err.to_string())
    }
}

impl From<UserError> for ApplicationError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => Self::not_found("User", id),
            UserError::Incomplete { id, missing } => Self::IncompleteRecord { id, missing },
        }
    }
}
