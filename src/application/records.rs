//! 文档 <-> 领域对象 转换

use serde_json::Value;

use crate::application::error::ApplicationError;
use crate::application::ports::Document;
use crate::domain::user::{NewUser, User};

/// 将存储中的文档解析为 User
pub fn user_from_document(document: Document) -> Result<User, ApplicationError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// 将待创建用户序列化为文档（缺失字段写为 null）
pub fn document_from_new_user(user: &NewUser) -> Result<Document, ApplicationError> {
    match serde_json::to_value(user)? {
        Value::Object(document) => Ok(document),
        other => Err(ApplicationError::MalformedRecord(format!(
            "expected an object, got {}",
            other
        ))),
    }
}
