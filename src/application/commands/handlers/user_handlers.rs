//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser};
use crate::application::error::ApplicationError;
use crate::application::ports::DocumentStorePort;
use crate::application::records::{document_from_new_user, user_from_document};
use crate::domain::user::{User, UserError, USERS_COLLECTION};

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
///
/// 先交给存储创建，再校验返回记录的完整性：
/// 字段缺失的记录仍会被保存，但调用方得到 IncompleteRecord。
pub struct CreateUserHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl CreateUserHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let payload = document_from_new_user(&command.user)?;

        let created = self
            .store
            .create(USERS_COLLECTION, payload)
            .await?
            .ok_or(ApplicationError::CreationRejected {
                resource_type: "User",
            })?;

        let user = user_from_document(created)?;
        user.ensure_complete()?;

        tracing::info!(user_id = %user.id(), "User created");

        Ok(user)
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
pub struct DeleteUserHandler {
    store: Arc<dyn DocumentStorePort>,
}

impl DeleteUserHandler {
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<(), ApplicationError> {
        let user_id = command.user_id;

        // 检查用户是否存在
        self.store
            .get_by_id(USERS_COLLECTION, user_id.as_i64())
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        self.store
            .delete_by_id(USERS_COLLECTION, user_id.as_i64())
            .await?;

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
