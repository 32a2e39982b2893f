//! HTTP Handlers

mod greeting;
mod user;

pub use greeting::*;
pub use user::*;
