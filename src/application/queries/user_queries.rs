//! User Queries

use crate::domain::user::UserId;

/// 获取用户详情查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: UserId,
}

/// 列出用户查询（可按团队过滤）
#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pub team: Option<String>,
}
