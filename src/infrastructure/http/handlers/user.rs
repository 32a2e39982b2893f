//! User HTTP Handlers

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{CreateUser, DeleteUser, GetUser, ListUsers};
use crate::domain::user::UserId;
use crate::infrastructure::http::dto::{ApiResponse, CreateUserRequest, Payload};
use crate::infrastructure::http::error::{message, ApiError};
use crate::infrastructure::http::state::AppState;

/// 解析 `:id` 路径参数；非整数按不存在的 id 处理
fn parse_user_id(user_id: Result<Path<i64>, PathRejection>) -> Result<UserId, ApiError> {
    match user_id {
        Ok(Path(id)) => Ok(UserId::new(id)),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unparsable user id");
            Err(ApiError::NotFound(message::INVALID_ID))
        }
    }
}

/// 取第一个 `team` 参数；重复出现时忽略其余的值
fn first_team(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "team")
        .map(|(_, value)| value)
}

/// GET /users - 获取用户列表，可按 team 过滤
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<ApiResponse, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;
    let query = ListUsers {
        team: first_team(params),
    };

    let users = state.list_users_handler.handle(query).await?;

    Ok(ApiResponse::success(Payload::Users(
        users.into_iter().map(Into::into).collect(),
    )))
}

/// GET /users/:id - 获取用户详情
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse, ApiError> {
    let query = GetUser {
        user_id: parse_user_id(user_id)?,
    };

    let user = state.get_user_handler.handle(query).await?;

    Ok(ApiResponse::success(Payload::User(user.into())))
}

/// POST /users - 创建用户
///
/// 请求体按 JSON 解析，不要求 Content-Type。
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<ApiResponse, ApiError> {
    let req: CreateUserRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;

    let command = CreateUser { user: req.into() };

    let user = state.create_user_handler.handle(command).await?;

    Ok(ApiResponse::with_status(
        Payload::User(user.into()),
        StatusCode::CREATED,
    ))
}

/// DELETE /users/:id - 删除用户
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse, ApiError> {
    let command = DeleteUser {
        user_id: parse_user_id(user_id)?,
    };

    state.delete_user_handler.handle(command).await?;

    Ok(ApiResponse::message(
        StatusCode::OK,
        "Successfully deleted!",
    ))
}
