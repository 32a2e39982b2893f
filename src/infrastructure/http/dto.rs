//! Data Transfer Objects

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::domain::user::{NewUser, User};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 响应信封构建错误
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// result 只能是映射或缺省
    #[error("Data should be a mapping, got {0}")]
    InvalidPayloadShape(&'static str),

    /// 无法作为 HTTP 状态行的状态码
    #[error("Invalid HTTP status code: {0}")]
    InvalidStatus(u16),
}

/// 可以作为 `result` 的载荷：序列化结果必须是单层映射
pub trait ResultPayload: Serialize {}

impl ResultPayload for Map<String, Value> {}

/// 统一 API 响应格式
///
/// ```json
/// {"code": 200, "success": true, "message": "", "result": {"users": []}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T: ResultPayload = Payload> {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<T>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: ResultPayload> ApiResponse<T> {
    /// 所有响应都经由此处组装，`code` 与 HTTP 状态行始终一致
    pub fn new(result: Option<T>, status: StatusCode, message: impl Into<String>) -> Self {
        let code = status.as_u16();
        Self {
            code,
            success: (200..300).contains(&code),
            message: message.into(),
            result,
            status,
        }
    }

    /// 200 成功响应
    pub fn success(result: T) -> Self {
        Self::new(Some(result), StatusCode::OK, "")
    }

    /// 带状态码的成功响应（如 201）
    pub fn with_status(result: T, status: StatusCode) -> Self {
        Self::new(Some(result), status, "")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiResponse<Payload> {
    /// 仅包含消息的响应（result 为 null）
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(None, status, message)
    }
}

impl ApiResponse<Map<String, Value>> {
    /// 从动态 JSON 构建响应
    ///
    /// `data` 必须是 JSON 对象或缺省，否则返回 `InvalidPayloadShape`；
    /// `status` 必须是合法的 HTTP 状态码（100..=999），否则返回 `InvalidStatus`。
    pub fn build(
        data: Option<Value>,
        status: u16,
        message: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        let status =
            StatusCode::from_u16(status).map_err(|_| EnvelopeError::InvalidStatus(status))?;
        let result = match data {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => return Err(EnvelopeError::InvalidPayloadShape(json_kind(&other))),
        };
        Ok(Self::new(result, status, message))
    }
}

impl<T: ResultPayload> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 用户路由的 result 载荷
///
/// 外部标签序列化，保持 `{"<key>": <value>}` 的单键映射形状。
/// 无载荷的响应见 [`ApiResponse::message`]。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Payload {
    Users(Vec<UserResponse>),
    User(UserResponse),
}

impl ResultPayload for Payload {}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: Option<String>,
    pub age: Option<Number>,
    pub team: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().as_i64(),
            name: user.name().map(str::to_string),
            age: user.age().cloned(),
            team: user.team().map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub age: Option<Number>,
    pub team: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            team: req.team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn test_success_flag_follows_2xx_range() {
        for status in [100, 199, 200, 201, 204, 299, 300, 301, 404, 422, 500, 999] {
            let response = ApiResponse::build(None, status, "").unwrap();
            assert_eq!(response.code, status);
            assert_eq!(response.success, (200..300).contains(&status), "status {}", status);
        }
    }

    #[test]
    fn test_build_keeps_mapping_unchanged() {
        let data = json!({"users": [{"id": 1, "name": "Aria", "age": 19, "team": "LWB"}]});
        let response = ApiResponse::build(Some(data.clone()), 200, "").unwrap();
        assert_eq!(response.result, Some(object(data)));
    }

    #[test]
    fn test_build_rejects_non_mapping_data() {
        for data in [json!(1), json!("users"), json!([1, 2]), json!(true)] {
            let err = ApiResponse::build(Some(data), 200, "").unwrap_err();
            assert!(matches!(err, EnvelopeError::InvalidPayloadShape(_)));
        }
    }

    #[test]
    fn test_build_without_data_serializes_null_result() {
        let response = ApiResponse::build(None, 404, "Invalid ID").unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({"code": 404, "success": false, "message": "Invalid ID", "result": null})
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let user = UserResponse {
            id: 1,
            name: Some("Ann".to_string()),
            age: Some(Number::from(30)),
            team: None,
        };
        assert_eq!(
            serde_json::to_value(Payload::Users(vec![user.clone()])).unwrap(),
            json!({"users": [{"id": 1, "name": "Ann", "age": 30, "team": null}]})
        );
        let response = ApiResponse::with_status(Payload::User(user), StatusCode::CREATED);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "code": 201,
                "success": true,
                "message": "",
                "result": {"user": {"id": 1, "name": "Ann", "age": 30, "team": null}}
            })
        );
    }

    #[test]
    fn test_message_response_has_no_result() {
        let response = ApiResponse::message(StatusCode::OK, "Successfully deleted!");
        assert!(response.success);
        assert!(response.result.is_none());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_build_rejects_out_of_range_status() {
        for status in [0, 42, 99, 1000] {
            let err = ApiResponse::build(None, status, "").unwrap_err();
            assert!(matches!(err, EnvelopeError::InvalidStatus(s) if s == status));
        }
    }

    #[test]
    fn test_code_matches_status_line() {
        let response = ApiResponse::build(None, 299, "").unwrap();
        assert_eq!(response.status().as_u16(), response.code);

        let http = response.into_response();
        assert_eq!(http.status().as_u16(), 299);
    }
}
