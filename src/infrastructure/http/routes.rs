//! HTTP Routes
//!
//! API Endpoints:
//! - /                GET     静态问候
//! - /mirror/:name    GET     回显路径参数
//! - /users           GET     用户列表（?team= 过滤）
//! - /users           POST    创建用户
//! - /users/:id       GET     用户详情
//! - /users/:id       DELETE  删除用户

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::hello_world).fallback(handlers::method_not_allowed),
        )
        .route(
            "/mirror/:name",
            get(handlers::mirror).fallback(handlers::method_not_allowed),
        )
        // User 路由
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/users/:user_id",
            get(handlers::get_user)
                .delete(handlers::delete_user)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
}
