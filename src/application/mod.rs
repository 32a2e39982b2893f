//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DocumentStore）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - records: 存储文档与领域对象的转换
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod records;

// Re-exports
pub use commands::{
    handlers::{CreateUserHandler, DeleteUserHandler},
    CreateUser, DeleteUser,
};

pub use error::ApplicationError;

pub use ports::{Document, DocumentStorePort, RepositoryError};

pub use queries::{
    handlers::{GetUserHandler, ListUsersHandler},
    GetUser, ListUsers,
};
