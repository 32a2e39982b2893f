//! Roster - 用户名册 HTTP API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户记录与完整性校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（DocumentStore）
//! - Commands: CQRS 命令处理器（创建、删除）
//! - Queries: CQRS 查询处理器（列表、详情）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API，统一响应信封
//! - Memory: 内存文档存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
