//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateUserHandler, DeleteUserHandler,
    // Query handlers
    GetUserHandler, ListUsersHandler,
    // Ports
    DocumentStorePort,
};

/// 应用状态
///
/// 存储通过构造函数注入，测试中每个用例可使用独立的存储
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,
    pub delete_user_handler: DeleteUserHandler,

    // ========== Query Handlers ==========
    pub get_user_handler: GetUserHandler,
    pub list_users_handler: ListUsersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn DocumentStorePort>) -> Self {
        Self {
            // Command handlers
            create_user_handler: CreateUserHandler::new(store.clone()),
            delete_user_handler: DeleteUserHandler::new(store.clone()),

            // Query handlers
            get_user_handler: GetUserHandler::new(store.clone()),
            list_users_handler: ListUsersHandler::new(store),
        }
    }
}
