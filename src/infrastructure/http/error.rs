//! HTTP Error Handling
//!
//! 所有错误都通过 `ApiResponse` 渲染，保证错误响应同样是统一信封格式。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::{ApiResponse, EnvelopeError};
use crate::application::ApplicationError;

/// 对外错误消息
pub mod message {
    pub const INVALID_ID: &str = "Invalid ID";
    pub const USER_INFO_NOT_FOUND: &str = "User info not found";
    pub const INFORMATION_MISSING: &str = "Some information is missing!";
    pub const ROUTE_NOT_FOUND: &str = "Not Found";
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
    pub const INVALID_NAME: &str = "Invalid name";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404，附带对外消息
    NotFound(&'static str),
    /// 422，创建后的记录字段不完整
    IncompleteRecord,
    /// 400，请求格式错误
    BadRequest(String),
    /// 405，路由存在但方法不支持
    MethodNotAllowed,
    /// 500，响应信封构建失败（载荷形状或状态码非法）
    Envelope(String),
    /// 500
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                ApiResponse::message(StatusCode::NOT_FOUND, msg)
            }
            ApiError::IncompleteRecord => {
                tracing::warn!(error = message::INFORMATION_MISSING, "Incomplete record");
                ApiResponse::message(StatusCode::UNPROCESSABLE_ENTITY, message::INFORMATION_MISSING)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                ApiResponse::message(StatusCode::BAD_REQUEST, msg)
            }
            ApiError::MethodNotAllowed => {
                ApiResponse::message(StatusCode::METHOD_NOT_ALLOWED, message::METHOD_NOT_ALLOWED)
            }
            ApiError::Envelope(msg) => {
                tracing::error!(error = %msg, "Failed to build response envelope");
                ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ApiResponse::message(StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR)
            }
        };

        response.into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(message::INVALID_ID),
            ApplicationError::CreationRejected { .. } => {
                ApiError::NotFound(message::USER_INFO_NOT_FOUND)
            }
            ApplicationError::IncompleteRecord { id, missing } => {
                tracing::debug!(user_id = %id, missing = ?missing, "Created record is incomplete");
                ApiError::IncompleteRecord
            }
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::MalformedRecord(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        ApiError::Envelope(e.to_string())
    }
}
