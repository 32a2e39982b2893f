//! User Context - Errors

use thiserror::Error;

use super::UserId;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("用户不存在: {0}")]
    NotFound(UserId),

    #[error("用户信息不完整，缺少字段: {}", .missing.join(", "))]
    Incomplete {
        id: UserId,
        missing: Vec<&'static str>,
    },
}
