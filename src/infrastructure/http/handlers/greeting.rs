//! Greeting Handlers
//!
//! 静态问候、路径回显以及未匹配路由/方法的兜底响应

use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
};
use serde_json::{json, Map, Value};

use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::{message, ApiError};

/// GET / - 静态问候
pub async fn hello_world() -> Result<ApiResponse<Map<String, Value>>, ApiError> {
    Ok(ApiResponse::build(
        Some(json!({"content": "hello world!"})),
        StatusCode::OK.as_u16(),
        "",
    )?)
}

/// GET /mirror/:name - 回显路径参数
///
/// 解码后不是合法 UTF-8 的路径段返回 400 信封
pub async fn mirror(
    name: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse<Map<String, Value>>, ApiError> {
    let Path(name) = name.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unparsable mirror name");
        ApiError::BadRequest(message::INVALID_NAME.to_string())
    })?;

    Ok(ApiResponse::build(
        Some(json!({ "name": name })),
        StatusCode::OK.as_u16(),
        "",
    )?)
}

/// 未匹配路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound(message::ROUTE_NOT_FOUND)
}

/// 路由存在但方法不匹配
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
