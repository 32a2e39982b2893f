//! User Commands

use crate::domain::user::{NewUser, UserId};

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub user: NewUser,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: UserId,
}
