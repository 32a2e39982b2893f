//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户记录（id 由存储分配）
//! - 记录完整性校验（name / age / team）
//! - 团队归属判断

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{NewUser, User};
pub use errors::UserError;
pub use value_objects::{UserId, USERS_COLLECTION};
